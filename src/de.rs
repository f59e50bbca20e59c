use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Error, SeqAccess, Visitor};

use crate::leftist_heap::{LeftistHeap, TryCompare};

impl<'de, T, C> Deserialize<'de> for LeftistHeap<T, C>
where
    T: Deserialize<'de>,
    C: TryCompare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor<'de, T, C>(PhantomData<(&'de (), T, C)>);

        impl<'de, T, C> Visitor<'de> for ValueVisitor<'de, T, C>
        where
            T: Deserialize<'de>,
            C: TryCompare<T> + Default,
        {
            type Value = LeftistHeap<T, C>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values = LeftistHeap::with_comparator(C::default());

                while let Some(value) = seq.next_element()? {
                    if values.push(value).is_err() {
                        return Err(A::Error::custom("comparator failed while rebuilding the heap"));
                    }
                }

                Ok(values)
            }
        }
        deserializer.deserialize_seq(ValueVisitor(PhantomData))
    }
}
