//! Macros for declaring records as ordered field lists.

/// Generates a `Codec` impl for a wrapper type.
#[macro_export]
macro_rules! impl_wrapper_codec {
    ($this:ty => $target:ty) => {
        impl $crate::Codec for $this {
            fn decode(dec: &mut impl $crate::Decoder) -> Result<Self, $crate::CodecError> {
                <$target as $crate::Codec>::decode(dec).map(Self)
            }

            fn encode(&self, enc: &mut impl $crate::Encoder) -> Result<(), $crate::CodecError> {
                self.0.encode(enc)
            }
        }
    };
}

/// Generates a record struct with a `Codec` impl, assuming each of its fields
/// is `Codec`.
///
/// Fields are read and written in declaration order, so the struct
/// definition *is* the wire layout.  Width and length handling belong to the
/// field types (`VarLenInt`, `ShortBytes`, `Prefixed<T>`, `CountedVec<T>`,
/// ...), which keeps the generated reader free of lookahead.
///
/// Alongside the struct this generates `new` taking every field in order and
/// a by-ref accessor per field.
///
/// A trailing `check = <fn(&Self) -> Result<(), CodecError>>;` runs a
/// whole-record check after decoding and before encoding, for constraints
/// that span fields or that no single field type can carry.
#[macro_export]
macro_rules! impl_record_struct {
    {
        $( #[ $sattr:meta ] )*
        $v:vis struct $name:ident {
            $(
                $( #[ $fattr:meta ] )*
                $fname:ident : $fty:ty,
            )*
        }
        check = $check:expr;
    } => {
        $( #[ $sattr ] )*
        $v struct $name {
            $(
                $( #[ $fattr ] )*
                $fname : $fty,
            )*
        }

        impl $name {
            /// Constructs a new instance from its fields in wire order.
            #[allow(clippy::too_many_arguments, reason = "one arg per wire field")]
            $v fn new($( $fname : $fty ),*) -> Self {
                Self { $( $fname ),* }
            }

            $(
                #[doc = concat!("Returns the `", stringify!($fname), "` field.")]
                $v fn $fname(&self) -> &$fty {
                    &self.$fname
                }
            )*
        }

        impl $crate::Codec for $name {
            fn decode(dec: &mut impl $crate::Decoder) -> Result<Self, $crate::CodecError> {
                $(
                    let $fname = <$fty as $crate::Codec>::decode(dec)?;
                )*
                let rec = Self::new($($fname),*);
                ($check)(&rec)?;
                Ok(rec)
            }

            fn encode(&self, enc: &mut impl $crate::Encoder) -> Result<(), $crate::CodecError> {
                ($check)(self)?;
                $(<$fty as $crate::Codec>::encode(&self.$fname, enc)?;)*
                Ok(())
            }
        }
    };

    {
        $( #[ $sattr:meta ] )*
        $v:vis struct $name:ident {
            $(
                $( #[ $fattr:meta ] )*
                $fname:ident : $fty:ty,
            )*
        }
    } => {
        $crate::impl_record_struct! {
            $( #[ $sattr ] )*
            $v struct $name {
                $(
                    $( #[ $fattr ] )*
                    $fname : $fty,
                )*
            }
            check = |_: &$name| Ok::<(), $crate::CodecError>(());
        }
    };
}
