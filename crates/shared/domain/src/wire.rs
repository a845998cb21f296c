//! Integer-coded vocabularies shared with other processes.
//!
//! Codes are append-only: a published code is never reassigned, new values are only
//! added after the highest one. Decoding is total so that a peer running a newer or
//! older protocol version can never crash the receiver.

/// A closed enumeration with a stable integer wire code per variant.
pub trait WireEnum: Copy + Sized + 'static {
    /// Name of the vocabulary, used in diagnostics.
    const NAME: &'static str;

    /// The stable code of this value.
    fn wire_code(self) -> i32;

    /// Decodes a wire code, `None` for any code this build does not know.
    fn from_wire(code: i32) -> Option<Self>;
}

/// Declares a [`WireEnum`] with symbolic `SCREAMING_SNAKE_CASE` names.
///
/// Values serialize as their integer code. Deserializing an unknown code is an error;
/// callers that must tolerate unknown codes decode the integer with
/// [`WireEnum::from_wire`] instead.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::strum_macros::Display, ::strum_macros::EnumString, ::strum_macros::EnumIter,
            ::strum_macros::EnumCount, ::strum_macros::IntoStaticStr, ::strum_macros::FromRepr,
        )]
        #[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
        #[repr(i32)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant = $code, )+
        }

        impl $crate::wire::WireEnum for $name {
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn wire_code(self) -> i32 {
                self as i32
            }

            #[inline]
            fn from_wire(code: i32) -> Option<Self> {
                Self::from_repr(code)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_i32($crate::wire::WireEnum::wire_code(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let code = <i32 as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::wire::WireEnum>::from_wire(code).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::custom(format!(
                        "unknown {} wire code {code}",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

pub(crate) use wire_enum;
