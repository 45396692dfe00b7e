use js_sys::{Array, Object, Reflect, TypeError};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

/// An ordered collection of properties to assign onto a JS object.
///
/// Values are assigned as direct properties (`element.count = 5`) rather than attributes, so
/// anything representable as a [`JsValue`] can be passed through: numbers, booleans, objects and
/// functions all arrive with their original type.
#[derive(Clone, Default)]
pub struct PropertyBag(Vec<(String, JsValue)>);

impl PropertyBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a bag from the fields of a serializable value. The value must serialize to a plain
    /// object (a struct or a map), whose entries become the properties in their original order.
    pub fn from_serialize<T>(value: &T) -> Result<Self, JsValue>
    where
        T: Serialize + ?Sized,
    {
        let value = value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;

        if Array::is_array(&value) {
            return Err(JsValue::from_str(
                "property bag cannot be built from a sequence",
            ));
        }

        let object = value
            .dyn_into::<Object>()
            .map_err(|_| JsValue::from_str("property bag must be built from an object"))?;

        Ok(Object::entries(&object)
            .iter()
            .filter_map(|entry| {
                let entry = entry.unchecked_into::<Array>();
                Some((entry.get(0).as_string()?, entry.get(1)))
            })
            .fold(Self::new(), |bag, (key, value)| bag.with(key, value)))
    }

    /// Adds a property. Inserting a key that is already present replaces its value, keeping its
    /// original position.
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<JsValue>,
    {
        let key = key.into();
        let value = value.into();

        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }

        self
    }

    /// Adds a property holding any serializable value.
    pub fn with_serialized<K, T>(self, key: K, value: &T) -> Result<Self, JsValue>
    where
        K: Into<String>,
        T: Serialize + ?Sized,
    {
        let value = value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        Ok(self.with(key, value))
    }

    pub fn get(&self, key: &str) -> Option<&JsValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Assigns every property onto `target`, in insertion order.
    ///
    /// Assignment stops at the first property the target refuses (read only, getter only, frozen
    /// target), returning a `TypeError` as a strict mode assignment would. A setter that throws
    /// stops it too, and its error is returned as is.
    pub fn apply<T>(&self, target: &T) -> Result<(), JsValue>
    where
        T: AsRef<JsValue>,
    {
        let target = target.as_ref();

        for (key, value) in self.iter() {
            if !Reflect::set(target, &JsValue::from_str(key), value)? {
                return Err(TypeError::new(&format!(
                    "cannot assign to read only property `{key}`"
                ))
                .into());
            }
        }

        Ok(())
    }
}
