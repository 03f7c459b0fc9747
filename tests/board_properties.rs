// Board-level behavior through the public API

#[cfg(test)]
mod tests {
    use orangepi_gpio::gpio::pins::{CONNECTOR_PINS, PORT_PINS};
    use orangepi_gpio::gpio::ORANGE_PI_ONE;
    use orangepi_gpio::{GpioError, Level, Mode, OrangePiOne, PinId, Pull};

    #[test]
    fn test_port_pins_preset_after_init() {
        let board = OrangePiOne::new();
        for (name, id) in PORT_PINS {
            let pin = PinId(*id);
            assert_eq!(board.store().get_mode(pin), Ok(Some(Mode::Input)), "{name}");
            assert_eq!(board.store().read(pin), Ok(Some(Level::High)), "{name}");
            assert_eq!(board.store().get_pull(pin), Ok(None), "{name}");
        }
        assert_eq!(board.store().len(), ORANGE_PI_ONE.port.len());
    }

    #[test]
    fn test_unknown_name_fails_everywhere_without_mutation() {
        let mut board = OrangePiOne::new();
        let before = board.store().snapshot();
        let unknown = || GpioError::UnknownPin("PB99".to_string());

        assert_eq!(board.resolve("PB99"), Err(unknown()));
        assert_eq!(board.turn_on("PB99"), Err(unknown()));
        assert_eq!(board.turn_off("PB99"), Err(unknown()));
        assert_eq!(board.toggle("PB99"), Err(unknown()));
        assert_eq!(board.set_pullup("PB99"), Err(unknown()));
        assert_eq!(board.set_pulldown("PB99"), Err(unknown()));
        assert_eq!(board.clear_pull("PB99"), Err(unknown()));
        assert_eq!(board.read_as_input("PB99"), Err(unknown()));
        assert_eq!(board.peek("PB99"), Err(unknown()));
        assert_eq!(board.is_high("PB99"), Err(unknown()));
        assert_eq!(board.is_low("PB99"), Err(unknown()));
        assert_eq!(board.is_output("PB99"), Err(unknown()));
        assert_eq!(board.is_input("PB99"), Err(unknown()));

        assert_eq!(board.store().snapshot(), before);
    }

    #[test]
    fn test_pulldown_on_unknown_name_touches_nothing() {
        let mut board = OrangePiOne::new();
        assert!(board.set_pulldown("").is_err());
        assert!(board
            .store()
            .snapshot()
            .values()
            .all(|record| record.pull.is_none()));
    }

    #[test]
    fn test_turn_on_is_idempotent() {
        let mut once = OrangePiOne::new();
        once.turn_on("PC4").unwrap();
        let mut twice = OrangePiOne::new();
        twice.turn_on("PC4").unwrap();
        twice.turn_on("PC4").unwrap();
        assert_eq!(once.store().snapshot(), twice.store().snapshot());
        assert_eq!(twice.mode("PC4"), Ok(Some(Mode::Output)));
        assert_eq!(twice.peek("PC4"), Ok(Some(Level::High)));
    }

    #[test]
    fn test_on_off_round_trip() {
        let mut board = OrangePiOne::new();
        board.turn_on("PG7").unwrap();
        assert_eq!(board.peek("PG7"), Ok(Some(Level::High)));
        board.turn_off("PG7").unwrap();
        assert_eq!(board.peek("PG7"), Ok(Some(Level::Low)));
    }

    #[test]
    fn test_toggle_from_high() {
        let mut board = OrangePiOne::new();
        assert_eq!(board.peek("PA0"), Ok(Some(Level::High)));
        assert_eq!(board.toggle("PA0"), Ok(Level::Low));
        assert_eq!(board.peek("PA0"), Ok(Some(Level::Low)));
        assert_eq!(board.toggle("PA0"), Ok(Level::High));
        assert_eq!(board.peek("PA0"), Ok(Some(Level::High)));
        assert_eq!(board.is_output("PA0"), Ok(true));
    }

    #[test]
    fn test_aliases_share_state() {
        let mut board = OrangePiOne::new();
        board.turn_off("gpio1p8").unwrap();
        assert_eq!(board.peek("PA13"), Ok(Some(Level::Low)));
        assert_eq!(board.store().read(PinId(8)), Ok(Some(Level::Low)));

        board.set_pullup("PA13").unwrap();
        assert_eq!(board.pull_state("gpio1p8"), Ok(Some(Pull::Up)));

        board.toggle("LEDp1").unwrap();
        assert_eq!(board.is_low("POWER_LED"), Ok(true));
    }

    #[test]
    fn test_every_connector_name_aliases_a_port_pin() {
        for (name, id) in CONNECTOR_PINS {
            assert!(ORANGE_PI_ONE.port.contains(PinId(*id)), "{name}");
        }
    }

    #[test]
    fn test_pull_independent_of_mode_and_value() {
        let mut board = OrangePiOne::new();
        board.turn_off("PD14").unwrap();
        board.set_pullup("PD14").unwrap();
        assert_eq!(board.mode("PD14"), Ok(Some(Mode::Output)));
        assert_eq!(board.peek("PD14"), Ok(Some(Level::Low)));

        board.set_pulldown("PD14").unwrap();
        board.turn_on("PD14").unwrap();
        assert_eq!(board.pull_state("PD14"), Ok(Some(Pull::Down)));

        board.clear_pull("PD14").unwrap();
        assert_eq!(board.pull_state("PD14"), Ok(Some(Pull::None)));
        assert_eq!(board.peek("PD14"), Ok(Some(Level::High)));
    }

    #[test]
    fn test_pa13_scenario() {
        let mut board = OrangePiOne::new();
        board.turn_on("PA13").unwrap();
        assert_eq!(board.is_output("PA13"), Ok(true));
        assert_eq!(board.is_high("PA13"), Ok(true));
        board.turn_off("PA13").unwrap();
        assert_eq!(board.is_high("PA13"), Ok(false));
        assert_eq!(board.is_low("PA13"), Ok(true));
    }

    #[test]
    fn test_peek_keeps_mode_read_switches_it() {
        let mut board = OrangePiOne::new();
        board.turn_on("PA21").unwrap();
        assert_eq!(board.peek("PA21"), Ok(Some(Level::High)));
        assert_eq!(board.is_output("PA21"), Ok(true));
        assert_eq!(board.read_as_input("PA21"), Ok(Some(Level::High)));
        assert_eq!(board.is_input("PA21"), Ok(true));
    }

    #[test]
    fn test_boards_are_independent() {
        let mut first = OrangePiOne::new();
        let second = OrangePiOne::new();
        first.turn_off("PA13").unwrap();
        assert_eq!(second.peek("PA13"), Ok(Some(Level::High)));
    }
}
