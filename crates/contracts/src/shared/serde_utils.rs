use serde::{Deserialize, Deserializer};

/// `null` и отсутствующее поле превращаются в значение по умолчанию.
///
/// Использовать вместе с `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
