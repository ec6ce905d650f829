use bevy::color::HexColorError;

#[derive(Debug, thiserror::Error)]
pub enum VjoyError {
    #[error("invalid joystick color {value:?}: {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: HexColorError,
    },
}
