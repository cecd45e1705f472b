//! Property testing macros and utilities for vbk-codec.
//!
//! This crate provides macros to generate property tests for types that
//! implement the `Codec` trait from vbk-codec. The main export is the
//! `generate_codec_tests!` macro.

// Re-export dependencies for macro usage
pub use paste;
pub use proptest;
pub use vbk_codec;

/// Generates property tests for a type that implements `Codec` using proptest.
///
/// This macro creates property-based tests to verify that:
/// 1. Encoding then decoding produces the original value (round-trip property)
/// 2. The encoding is deterministic (same input always produces same output)
/// 3. Different inputs produce different encodings (when feasible)
/// 4. Dropping the last byte of an encoding makes it fail to decode with an
///    underflow, rather than decoding to some other value
///
/// Values come from `any::<T>()` unless a strategy expression is passed as a
/// third argument, which is needed for types from other crates that can't
/// implement `Arbitrary` here.
///
/// # Requirements
///
/// The type must implement:
/// - `vbk_codec::Codec` - for encoding/decoding
/// - `proptest::arbitrary::Arbitrary` - for generating test values, unless a
///   strategy is given
/// - `Debug + PartialEq` - for test assertions
///
/// # Example
/// ```rust,ignore
/// use vbk_codec_tests::generate_codec_tests;
/// use vbk_codec::{VarLenInt, impl_record_struct};
/// use proptest::prelude::*;
///
/// impl_record_struct! {
///     #[derive(Debug, Clone, PartialEq)]
///     struct MyType {
///         field: u32,
///     }
/// }
///
/// impl Arbitrary for MyType {
///     type Parameters = ();
///     type Strategy = BoxedStrategy<MyType>;
///
///     fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
///         any::<u32>().prop_map(MyType::new).boxed()
///     }
/// }
///
/// generate_codec_tests!(MyType, "my_type");
/// generate_codec_tests!(VarLenInt, "var_len_int", any::<u64>().prop_map(VarLenInt::new));
/// ```
#[macro_export]
macro_rules! generate_codec_tests {
    ($type:ty, $name:expr) => {
        $crate::generate_codec_tests!(
            $type,
            $name,
            $crate::proptest::prelude::any::<$type>()
        );
    };
    ($type:ty, $name:expr, $strat:expr) => {
        $crate::paste::paste! {
            mod [<proptest_ $name _codec>] {
                use super::*;
                use $crate::proptest::{prelude::{prop_assert, prop_assert_eq, prop_assert_ne, prop_assume}, proptest, strategy::Strategy};
                use $crate::vbk_codec::{encode_to_vec, decode_buf_exact};

                $crate::proptest::proptest! {
                    #[test]
                    fn [<test_codec_roundtrip>](value in $strat) {
                        let encoded = encode_to_vec(&value).expect("test: encoding should succeed");
                        let decoded = decode_buf_exact::<$type>(&encoded).expect("test: decoding should succeed");
                        prop_assert_eq!(value, decoded);
                    }

                    #[test]
                    fn [<test_codec_deterministic>](value in $strat) {
                        let encoded1 = encode_to_vec(&value).expect("encoding should succeed");
                        let encoded2 = encode_to_vec(&value).expect("encoding should succeed");
                        prop_assert_eq!(encoded1, encoded2, "test: unexpected inequality");
                    }

                    #[test]
                    fn [<test_codec_different_inputs>](
                        value1 in $strat,
                        value2 in $strat
                    ) {
                        prop_assume!(value1 != value2);
                        let encoded1 = encode_to_vec(&value1).expect("test: encoding should succeed");
                        let encoded2 = encode_to_vec(&value2).expect("test: encoding should succeed");
                        prop_assert_ne!(encoded1, encoded2, "test: unexpected equality");
                    }

                    #[test]
                    fn [<test_codec_truncated>](value in $strat) {
                        let encoded = encode_to_vec(&value).expect("test: encoding should succeed");
                        prop_assume!(!encoded.is_empty());
                        let res = decode_buf_exact::<$type>(&encoded[..encoded.len() - 1]);
                        prop_assert!(
                            matches!(&res, Err(e) if e.is_underflow()),
                            "test: truncated decode gave {:?}",
                            res
                        );
                    }
                }
            }
        }
    };
}
