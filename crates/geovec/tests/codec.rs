use std::io::{self, Cursor};

use geovec::{codec, vec2, vec3, vec4, ByteOrder, Error, Scalar, Vec2, Vec3, Vec4, Vector};

fn init_logger() {
    env_logger::builder()
        .filter_module("geovec", log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .ok();
}

fn roundtrip<T: Scalar, const N: usize>(v: Vector<T, N>) -> anyhow::Result<()> {
    for order in [ByteOrder::Big, ByteOrder::Little] {
        let mut buf = Vec::new();
        v.write_to(&mut buf, order)?;
        assert_eq!(buf.len(), codec::encoded_len::<T, N>());
        assert_eq!(buf.len(), N * T::BYTES);

        let back = Vector::<T, N>::read_from(&buf[..], order)?;
        assert_eq!(back, v, "{} roundtrip in {:?} order", T::NAME, order);
    }
    Ok(())
}

macro_rules! int_roundtrips {
    ($($name:ident: $t:ty),+) => {
        $(
            #[test]
            fn $name() -> anyhow::Result<()> {
                init_logger();
                roundtrip(vec3::<$t>(<$t>::MIN, <$t>::MAX, 0))?;
                roundtrip(vec2::<$t>(-1, 1))?;
                roundtrip(vec4::<$t>(<$t>::MAX / 3, <$t>::MIN / 7, -100, 100))?;
                Ok(())
            }
        )+
    };
}

macro_rules! float_roundtrips {
    ($($name:ident: $t:ident),+) => {
        $(
            #[test]
            fn $name() -> anyhow::Result<()> {
                init_logger();
                roundtrip(vec3::<$t>(1.2, -2.3, 3.4))?;
                roundtrip(vec3::<$t>($t::MIN_POSITIVE, $t::MAX, -0.0))?;
                roundtrip(vec2::<$t>($t::INFINITY, $t::NEG_INFINITY))?;
                roundtrip(vec4::<$t>($t::EPSILON, 1.0, -1.0, 0.0))?;

                let mut buf = Vec::new();
                vec2::<$t>($t::NAN, 1.0).write_to(&mut buf, ByteOrder::Big)?;
                let back = Vec2::<$t>::read_from(&buf[..], ByteOrder::Big)?;
                assert!(back.x.is_nan());
                assert_eq!(back.y, 1.0);
                Ok(())
            }
        )+
    };
}

int_roundtrips!(roundtrip_i8: i8, roundtrip_i16: i16, roundtrip_i32: i32, roundtrip_i64: i64);
float_roundtrips!(roundtrip_f32: f32, roundtrip_f64: f64);

#[test]
fn byte_orders_mirror_each_other() -> anyhow::Result<()> {
    let v = vec3(0x0102_0304i32, -2, 0x7f00_00ff);

    let mut big = Vec::new();
    let mut little = Vec::new();
    codec::write(&v, &mut big, ByteOrder::Big)?;
    codec::write(&v, &mut little, ByteOrder::Little)?;

    assert_eq!(&big[..4], [1, 2, 3, 4]);
    for (b, l) in big.chunks(4).zip(little.chunks(4)) {
        let mut l = l.to_vec();
        l.reverse();
        assert_eq!(b, &l[..]);
    }

    let mut native = Vec::new();
    codec::write(&v, &mut native, ByteOrder::NATIVE)?;
    let expected: Vec<u8> = v.into_array().iter().flat_map(|c| c.to_ne_bytes()).collect();
    assert_eq!(native, expected);
    Ok(())
}

#[test]
fn float_bit_patterns() -> anyhow::Result<()> {
    let mut buf = Vec::new();
    codec::write(&vec2(1.0f64, -2.0), &mut buf, ByteOrder::Big)?;
    assert_eq!(&buf[..8], 1.0f64.to_be_bytes());
    assert_eq!(&buf[8..], (-2.0f64).to_be_bytes());

    buf.clear();
    codec::write(&vec2(0.5f32, 1.0), &mut buf, ByteOrder::Little)?;
    assert_eq!(buf, [0, 0, 0, 0x3f, 0, 0, 0x80, 0x3f]);
    Ok(())
}

#[test]
fn stream_of_records() -> anyhow::Result<()> {
    init_logger();

    let points = [
        vec4(1i16, 2, 3, 4),
        vec4(-5, -6, -7, -8),
        Vec4::W,
        Vec4::ZERO,
    ];

    let mut buf = Vec::new();
    for p in &points {
        p.write_to(&mut buf, ByteOrder::Little)?;
    }
    assert_eq!(buf.len(), points.len() * 8);

    let mut cursor = Cursor::new(buf);
    for p in &points {
        assert_eq!(Vec4::<i16>::read_from(&mut cursor, ByteOrder::Little)?, *p);
    }

    match Vec4::<i16>::read_from(&mut cursor, ByteOrder::Little) {
        Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("expected EOF error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn truncated_record() {
    let buf = [0u8; 11];
    let err = Vec3::<f32>::read_from(&buf[..], ByteOrder::Big).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    assert!(err.to_string().contains("I/O error"), "{err}");
}
