//! Integration tests for nested and framed codec types using proptest.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "macro hacks")]

use vbk_codec_tests::{
    generate_codec_tests,
    proptest::{collection::vec, prelude::*},
    vbk_codec::{
        Codec, CodecError, CountedVec, Decoder, Encoder, LongBytes, Prefixed, ShortBytes,
        VarLenInt, VarPrefixed, decode_buf_exact, encode_to_vec, impl_record_struct,
    },
};

// Example 1: Simple 3D point struct
impl_record_struct! {
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct Point3D {
        x: i32,
        y: i32,
        z: i32,
    }
}

impl Arbitrary for Point3D {
    type Parameters = ();
    type Strategy = BoxedStrategy<Point3D>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (any::<i32>(), any::<i32>(), any::<i32>())
            .prop_map(|(x, y, z)| Point3D::new(x, y, z))
            .boxed()
    }
}

generate_codec_tests!(Point3D, "point3d");

// Example 2: Enum with manual codec implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
    Custom(u8, u8, u8),
}

impl Codec for Color {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let variant = u8::decode(dec)?;
        match variant {
            0 => Ok(Color::Red),
            1 => Ok(Color::Green),
            2 => Ok(Color::Blue),
            3 => {
                let r = u8::decode(dec)?;
                let g = u8::decode(dec)?;
                let b = u8::decode(dec)?;
                Ok(Color::Custom(r, g, b))
            }
            tag => Err(CodecError::InvalidVariant { ty: "Color", tag }),
        }
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        match self {
            Color::Red => 0u8.encode(enc),
            Color::Green => 1u8.encode(enc),
            Color::Blue => 2u8.encode(enc),
            Color::Custom(r, g, b) => {
                3u8.encode(enc)?;
                r.encode(enc)?;
                g.encode(enc)?;
                b.encode(enc)
            }
        }
    }
}

impl Arbitrary for Color {
    type Parameters = ();
    type Strategy = BoxedStrategy<Color>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Color::Red),
            Just(Color::Green),
            Just(Color::Blue),
            (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::Custom(r, g, b)),
        ]
        .boxed()
    }
}

generate_codec_tests!(Color, "color_enum");

// Example 3: A record mixing every kind of framing
impl_record_struct! {
    #[derive(Clone, Debug, PartialEq)]
    pub struct Framed {
        id: VarLenInt,
        label: ShortBytes,
        position: Prefixed<Point3D>,
        trail: CountedVec<Prefixed<Point3D>>,
        colors: CountedVec<Color, 8>,
        payload: VarPrefixed<LongBytes>,
        checksum: [u8; 4],
    }
}

impl Arbitrary for Framed {
    type Parameters = ();
    type Strategy = BoxedStrategy<Framed>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (
            any::<u64>(),
            vec(any::<u8>(), 0..40),
            any::<Point3D>(),
            vec(any::<Point3D>(), 0..10),
            vec(any::<Color>(), 0..=8),
            vec(any::<u8>(), 0..600),
            any::<[u8; 4]>(),
        )
            .prop_map(|(id, label, position, trail, colors, payload, checksum)| {
                Framed::new(
                    VarLenInt::new(id),
                    ShortBytes::from_vec(label).unwrap(),
                    Prefixed(position),
                    CountedVec::from_vec(trail.into_iter().map(Prefixed).collect()).unwrap(),
                    CountedVec::from_vec(colors).unwrap(),
                    VarPrefixed(LongBytes::from_vec(payload).unwrap()),
                    checksum,
                )
            })
            .boxed()
    }
}

generate_codec_tests!(Framed, "framed");

#[test]
fn test_bounded_list_rejects_long_count() {
    let colors = CountedVec::<Color>::from_vec(vec![Color::Red; 9]).unwrap();
    let buf = encode_to_vec(&colors).unwrap();
    let err = decode_buf_exact::<CountedVec<Color, 8>>(&buf).unwrap_err();
    assert_eq!(err, CodecError::OverflowContainer { len: 9, bound: 8 });
}

#[test]
fn test_bad_variant_in_list() {
    let err = decode_buf_exact::<CountedVec<Color>>(&[1, 1, 9]).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidVariant {
            ty: "Color",
            tag: 9
        }
    );
}
