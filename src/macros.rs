// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Ordered list of derived features, the shape every parser returns.
///
/// ```
/// use spec_table::features;
/// let derived = features! { "battery_capacity_mah" => 4000, "battery_fast_charge" => true };
/// assert_eq!(derived.len(), 2);
/// ```
#[macro_export]
macro_rules! features {
    () => {
        ::std::vec::Vec::<(::std::string::String, $crate::features::FeatureValue)>::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        ::std::vec![
            $( (::std::string::String::from($name), $crate::features::FeatureValue::from($value)) ),+
        ]
    };
}
