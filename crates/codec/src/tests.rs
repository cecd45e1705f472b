#![allow(unreachable_pub, reason = "testing the macro")]

use crate::{
    Codec, CodecError, CountedVec, Prefixed, ShortBytes, VarLenInt, decode_buf_exact,
    encode_to_vec, impl_record_struct, impl_wrapper_codec,
};

impl_record_struct! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Coordinate {
        x: i32,
        y: i32,
        theta: u16,
    }
}

impl_record_struct! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Path {
        index: VarLenInt,
        label: ShortBytes,
        points: CountedVec<Prefixed<Coordinate>>,
    }
}

impl_record_struct! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Span {
        start: u16,
        end: u16,
    }
    check = Span::check_order;
}

impl Span {
    fn check_order(&self) -> Result<(), CodecError> {
        if self.start > self.end {
            return Err(CodecError::InvalidValue {
                ty: "Span",
                reason: format!("start {} after end {}", self.start, self.end),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Height(u32);

impl_wrapper_codec!(Height => u32);

#[test]
fn test_macro_gen() {
    let c = Coordinate::new(1, -2, 12345);

    let t1 = (12345u16 >> 8) as u8;
    let t2 = (12345u16 & 0xff) as u8;

    let f = format!("{c:?}");
    assert_eq!(f, "Coordinate { x: 1, y: -2, theta: 12345 }");
    assert_eq!(*c.theta(), 12345);

    let b = encode_to_vec(&c).expect("test: encode_to_vec");
    assert_eq!(&b, &[0, 0, 0, 1, 0xff, 0xff, 0xff, 0xfe, t1, t2]);
}

#[test]
fn test_nested_record_layout() {
    let path = Path::new(
        VarLenInt::new(300),
        ShortBytes::from_vec(b"ab".to_vec()).unwrap(),
        CountedVec::from_vec(vec![Prefixed(Coordinate::new(0, 0, 1))]).unwrap(),
    );

    let b = encode_to_vec(&path).unwrap();
    let mut exp = vec![2, 0x01, 0x2c, 2, b'a', b'b', 1, 1, 10];
    exp.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(b, exp);

    let back: Path = decode_buf_exact(&b).unwrap();
    assert_eq!(back, path);

    // Every strict prefix is a truncated record.
    for cut in 0..b.len() {
        let err = decode_buf_exact::<Path>(&b[..cut]).unwrap_err();
        assert!(err.is_underflow(), "cut at {cut} gave {err:?}");
    }

    let mut extra = b.clone();
    extra.push(0);
    assert_eq!(
        decode_buf_exact::<Path>(&extra).unwrap_err(),
        CodecError::ExtraInput(1)
    );
}

#[test]
fn test_wrapper_codec() {
    let b = encode_to_vec(&Height(7)).unwrap();
    assert_eq!(b, vec![0, 0, 0, 7]);
    assert_eq!(decode_buf_exact::<Height>(&b).unwrap(), Height(7));
}

#[test]
fn test_record_check() {
    let ok = Span::new(2, 5);
    let b = encode_to_vec(&ok).unwrap();
    assert_eq!(b, vec![0, 2, 0, 5]);
    assert_eq!(decode_buf_exact::<Span>(&b).unwrap(), ok);

    let err = decode_buf_exact::<Span>(&[0, 5, 0, 2]).unwrap_err();
    assert!(matches!(err, CodecError::InvalidValue { ty: "Span", .. }));

    // Nothing is written for a record that fails its check.
    let mut buf = Vec::new();
    assert!(Span::new(5, 2).encode(&mut buf).is_err());
    assert!(buf.is_empty());

    // Truncation still shows up as underflow, not as a failed check.
    assert!(decode_buf_exact::<Span>(&[0, 5, 0]).unwrap_err().is_underflow());
}
