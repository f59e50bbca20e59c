use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::leftist_heap::LeftistHeap;

impl<T, C> Serialize for LeftistHeap<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        self.try_visit(|element| seq.serialize_element(element))?;
        seq.end()
    }
}
