use core::fmt;

use ::serde::{Deserializer, Serializer, de};

use crate::{Ksuid, TOTAL_BYTES};

pub mod as_base62 {
    use super::*;

    pub fn serialize<S>(id: &Ksuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Ksuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Base62Visitor;

        impl de::Visitor<'_> for Base62Visitor {
            type Value = Ksuid;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 27-character base62 KSUID string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ksuid::decode(v).map_err(de::Error::custom)
            }
        }

        d.deserialize_str(Base62Visitor)
    }
}

pub mod as_bytes {
    use super::*;

    pub fn serialize<S>(id: &Ksuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_bytes(&id.to_bytes())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Ksuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BytesVisitor;

        impl<'de> de::Visitor<'de> for BytesVisitor {
            type Value = Ksuid;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "{TOTAL_BYTES} KSUID bytes")
            }

            #[inline]
            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ksuid::try_from_slice(v).map_err(de::Error::custom)
            }

            // Formats without a native byte type (JSON) hand over a sequence
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut bytes = [0_u8; TOTAL_BYTES];
                for (i, byte) in bytes.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
                }
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(TOTAL_BYTES + 1, &self));
                }
                Ok(Ksuid::from_bytes(bytes))
            }
        }

        d.deserialize_bytes(BytesVisitor)
    }
}
