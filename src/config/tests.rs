use crate::config::{ConfigInstance, IntoConfig};
use serde::Serialize;

/// Turn `builder` into a configuration, render it as toml and parse it
/// back. Panics if the configuration does not survive the trip.
pub(crate) fn test_config_builder<B, C>(builder: B) -> C
where
    B: IntoConfig<C>,
    C: ConfigInstance + Serialize + PartialEq + std::fmt::Debug,
{
    let config: C = builder.into_config();
    let toml = config.to_toml_string_pretty().unwrap();
    println!(
        "{} into {}: \n{}",
        std::any::type_name::<B>(),
        std::any::type_name::<C>(),
        toml
    );
    let parsed = C::from_string(&toml).unwrap();
    assert_eq!(parsed, config);
    parsed
}
