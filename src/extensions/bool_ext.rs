/// Renders a switch state the way monitoring output expects it.
pub trait SwitchState {
    /// Returns `"on"` for `true` and `"off"` for `false`.
    fn on_off(self) -> &'static str;

    /// Returns `1` for `true` and `0` for `false`.
    fn as_flag(self) -> u8;
}

impl SwitchState for bool {
    fn on_off(self) -> &'static str {
        if self { "on" } else { "off" }
    }

    fn as_flag(self) -> u8 {
        u8::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, "on", 1)]
    #[case(false, "off", 0)]
    fn renders_switch_state(#[case] input: bool, #[case] text: &str, #[case] flag: u8) {
        assert_eq!(input.on_off(), text);
        assert_eq!(input.as_flag(), flag);
    }
}
