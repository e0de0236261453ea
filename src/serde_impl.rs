//! `Serialize` and `Deserialize` for both list types.
//!
//! A list serializes as a sequence of characters. Human-readable formats
//! deserialize from either a string or a sequence of single characters;
//! compact binary formats, which cannot describe their own types, read back
//! exactly the sequence of chars that was written. Like
//! [`Seed`](crate::Seed), the whole input is validated before the list is
//! built.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::array::ArrayCharList;
use crate::contract::CharList;
use crate::error::CharListError;
use crate::linked::LinkedCharList;
use crate::validate::IntoElement;

fn serialize_chars<I, S>(chars: I, serializer: S) -> Result<S::Ok, S::Error>
where
    I: ExactSizeIterator<Item = char>,
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(chars.len()))?;
    for element in chars {
        seq.serialize_element(&element)?;
    }
    seq.end()
}

impl Serialize for ArrayCharList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_chars(self.iter(), serializer)
    }
}

impl Serialize for LinkedCharList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_chars(self.iter(), serializer)
    }
}

fn deserialize_list<'de, L, D>(deserializer: D) -> Result<L, D::Error>
where
    L: CharList,
    D: Deserializer<'de>,
{
    if deserializer.is_human_readable() {
        deserializer.deserialize_any(SeedVisitor(PhantomData))
    } else {
        deserializer.deserialize_seq(SeedVisitor(PhantomData))
    }
}

impl<'de> Deserialize<'de> for ArrayCharList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_list(deserializer)
    }
}

impl<'de> Deserialize<'de> for LinkedCharList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_list(deserializer)
    }
}

fn unsupported_seed<E: de::Error>(found: &dyn fmt::Display) -> E {
    E::custom(CharListError::InvalidArgument(format!(
        "initial elements must be a string or a sequence of characters, found {}",
        found
    )))
}

fn invalid_element<E: de::Error>(found: &dyn fmt::Display) -> E {
    E::custom(CharListError::InvalidElement(found.to_string()))
}

struct SeedVisitor<L>(PhantomData<L>);

impl<'de, L: CharList> Visitor<'de> for SeedVisitor<L> {
    type Value = L;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a sequence of single characters")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<L, E> {
        L::from_seed(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<L, A::Error> {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Element(element)) = seq.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<L, A::Error> {
        Err(unsupported_seed(&"a map"))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<L, E> {
        Err(unsupported_seed(&v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<L, E> {
        Err(unsupported_seed(&v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<L, E> {
        Err(unsupported_seed(&v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<L, E> {
        Err(unsupported_seed(&v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<L, E> {
        Err(unsupported_seed(&"null"))
    }
}

/// One validated item of a sequence seed.
struct Element(char);

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(ElementVisitor)
        } else {
            deserializer.deserialize_char(ElementVisitor)
        }
    }
}

struct ElementVisitor;

impl<'de> Visitor<'de> for ElementVisitor {
    type Value = Element;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a single character")
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Element, E> {
        Ok(Element(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Element, E> {
        v.into_element().map(Element).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Element, E> {
        Err(invalid_element(&v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Element, E> {
        Err(invalid_element(&v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Element, E> {
        Err(invalid_element(&v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Element, E> {
        Err(invalid_element(&v))
    }
}
