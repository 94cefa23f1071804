use volley::{
    Coordinate, PlayerId, Scenario, ScenarioError, ShipKind, ShipPlacement, TupleError, MAX_ROWS,
};

fn parse_err(text: &str) -> ScenarioError {
    Scenario::parse(text).unwrap_err()
}

#[test]
fn test_parse_worked_example() {
    let scenario =
        Scenario::parse("5 E\n2 ships\nq 1 1 A1 B2\nP 2 1 D4 C3\nA1 B2\nA1  B2   B3\n").unwrap();
    assert_eq!((scenario.width, scenario.height), (5, 5));
    assert_eq!(
        scenario.ships,
        vec![
            ShipPlacement {
                kind: ShipKind::Reinforced,
                width: 1,
                height: 1,
                anchors: [Coordinate::new(0, 0), Coordinate::new(1, 1)],
            },
            ShipPlacement {
                kind: ShipKind::Standard,
                width: 2,
                height: 1,
                anchors: [Coordinate::new(3, 3), Coordinate::new(2, 2)],
            },
        ]
    );
    assert_eq!(scenario.missiles[0].len(), 2);
    assert_eq!(
        scenario.missiles[1],
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 1),
            Coordinate::new(2, 1)
        ]
    );
}

#[test]
fn test_grid_size_errors() {
    assert_eq!(parse_err(""), ScenarioError::MissingLine { line: 1, expected: "the grid size" });
    assert_eq!(parse_err("5\n"), ScenarioError::GridSizeTokens);
    assert_eq!(parse_err("five E\n"), ScenarioError::InvalidWidth("five".into()));
    assert_eq!(parse_err("0 E\n"), ScenarioError::InvalidWidth("0".into()));
    assert_eq!(parse_err("5 7\n"), ScenarioError::InvalidHeight("7".into()));
    assert_eq!(
        parse_err("18446744073709551615 B\n0\n\n\n"),
        ScenarioError::GridTooLarge { width: usize::MAX, height: 2 }
    );
    assert_eq!(
        parse_err("1000000000 Z\n0\n\n\n"),
        ScenarioError::GridTooLarge { width: 1_000_000_000, height: 26 }
    );
    assert!(Scenario::parse("999 Z\n0\n\n\n").is_ok());
}

#[test]
fn test_validate_rejects_oversized_grid() {
    let scenario = Scenario {
        width: 4,
        height: MAX_ROWS + 1,
        ships: Vec::new(),
        missiles: [Vec::new(), Vec::new()],
    };
    assert_eq!(
        scenario.validate(),
        Err(ScenarioError::GridTooLarge { width: 4, height: 27 })
    );
    assert_eq!(
        scenario.validate().unwrap_err().to_string(),
        "Grid of 4x27 exceeds the 999x26 limit"
    );
}

#[test]
fn test_ship_count_errors() {
    assert_eq!(
        parse_err("5 E\n"),
        ScenarioError::MissingLine { line: 2, expected: "the number of ships" }
    );
    assert_eq!(parse_err("5 E\ntwo\n"), ScenarioError::InvalidShipCount("two".into()));
    assert_eq!(
        parse_err("5 E\n2\nP 1 1 A1 A1\n"),
        ScenarioError::MissingLine { line: 4, expected: "a ship definition" }
    );
}

#[test]
fn test_ship_line_errors() {
    assert_eq!(
        parse_err("5 E\n1\nP 1 1 A1\n\n\n"),
        ScenarioError::ShipTokens { line: 3, found: 4 }
    );
    assert_eq!(
        parse_err("5 E\n1\nX 1 1 A1 A1\n\n\n"),
        ScenarioError::UnknownShipType { line: 3, code: "X".into() }
    );
    assert_eq!(
        parse_err("5 E\n1\nP 0 1 A1 A1\n\n\n"),
        ScenarioError::InvalidShipSize { line: 3, value: "0".into() }
    );
    assert_eq!(
        parse_err("5 E\n1\nP 1 1 A1 11\n\n\n"),
        ScenarioError::InvalidTuple {
            line: 3,
            tuple: "11".into(),
            reason: TupleError::MissingRow,
        }
    );
}

#[test]
fn test_out_of_bounds_is_rejected() {
    assert_eq!(
        parse_err("5 E\n1\nP 2 1 A1 A5\n\n\n"),
        ScenarioError::ShipOutOfBounds {
            line: 3,
            player: PlayerId::Two,
            anchor: Coordinate::new(4, 0),
        }
    );
    assert_eq!(
        parse_err("5 E\n1\nP 1 1 A1 A1\nA1\nF1\n"),
        ScenarioError::TargetOutOfBounds { line: 5, tuple: "F1".into() }
    );
    assert_eq!(
        parse_err("5 E\n1\nP 1 1 A1 A1\nA6\n\n"),
        ScenarioError::TargetOutOfBounds { line: 4, tuple: "A6".into() }
    );
}

#[test]
fn test_errors_name_the_offending_input() {
    let message = parse_err("5 E\n1\nP 1 1 A1\n\n\n").to_string();
    assert_eq!(message, "Less than 5 parts on line 3 (found 4)");
}

#[test]
fn test_display_writes_input_format() {
    let text = "5 E\n2\nQ 1 1 A1 B2\nP 2 1 D4 C3\nA1 B2 B2 B3\nA1 B2 B3 A1 D1 E1 D4 D4 D5 D5\n";
    let scenario = Scenario::parse(text).unwrap();
    assert_eq!(scenario.to_string(), text);
}

#[test]
fn test_players_are_placed_independently() {
    let scenario = Scenario::parse("5 E\n1\nP 2 1 A1 C3\n\n\n").unwrap();
    let [one, two] = scenario.players();
    assert_eq!(one.surviving().next().unwrap().start, Coordinate::new(0, 0));
    assert_eq!(two.surviving().next().unwrap().start, Coordinate::new(2, 2));
    assert_eq!(one.grid().occupied(), 2);
    assert_eq!(two.grid().occupied(), 2);
}
