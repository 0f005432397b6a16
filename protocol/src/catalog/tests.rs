#[cfg(test)]
mod tests {
    use crate::{
        Creature, DecodeError, Move, RecordKind, creature_url, parse_creature, parse_move,
    };

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "base_experience": 64,
        "moves": [
            {
                "move": { "name": "razor-wind", "url": "https://pokeapi.co/api/v2/move/13/" },
                "version_group_details": []
            },
            {
                "move": { "name": "tackle", "url": "https://pokeapi.co/api/v2/move/33/" },
                "version_group_details": []
            }
        ],
        "sprites": {
            "front_default": "https://example.test/front/1.png",
            "back_default": "https://example.test/back/1.png",
            "front_shiny": null
        }
    }"#;

    #[test]
    fn test_parse_creature() {
        let creature = parse_creature(BULBASAUR).unwrap();

        assert_eq!(creature.name, "bulbasaur");
        assert_eq!(creature.move_count(), 2);
        assert_eq!(creature.move_at(1).unwrap().name, "tackle");
        assert_eq!(
            creature.move_at(1).unwrap().url,
            "https://pokeapi.co/api/v2/move/33/"
        );
        assert_eq!(creature.front_sprite(), Some("https://example.test/front/1.png"));
        assert_eq!(creature.back_sprite(), Some("https://example.test/back/1.png"));
    }

    #[test]
    fn test_parse_creature_null_sprites() {
        let body = r#"{"name":"missingno","moves":[],"sprites":{"front_default":null,"back_default":null}}"#;
        let creature = parse_creature(body).unwrap();

        assert_eq!(creature, Creature::new("missingno"));
        assert!(creature.front_sprite().is_none());
    }

    #[test]
    fn test_parse_creature_missing_name() {
        let result = parse_creature(r#"{"moves":[]}"#);

        assert!(matches!(
            result,
            Err(DecodeError::InvalidJson {
                kind: RecordKind::Creature,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_move() {
        let body = r#"{"id":33,"name":"tackle","power":40,"pp":35,"accuracy":100}"#;

        assert_eq!(parse_move(body).unwrap(), Move::new("tackle", 40));
    }

    #[test]
    fn test_parse_move_null_power() {
        let move_data = parse_move(r#"{"name":"growl","power":null}"#).unwrap();

        assert_eq!(move_data.power, None);
        assert_eq!(move_data.power_or_zero(), 0);
    }

    #[test]
    fn test_parse_move_missing_power() {
        let move_data = parse_move(r#"{"name":"splash"}"#).unwrap();

        assert_eq!(move_data.power_or_zero(), 0);
    }

    #[test]
    fn test_parse_empty() {
        let result = parse_move("  ");

        assert!(matches!(result, Err(DecodeError::EmptyBody(RecordKind::Move))));
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_move("<html>502</html>").unwrap_err();

        assert!(err.to_string().starts_with("Invalid move record"));
    }

    #[test]
    fn test_creature_url() {
        assert_eq!(
            creature_url("https://pokeapi.co/api/v2", 25),
            "https://pokeapi.co/api/v2/pokemon/25"
        );
        assert_eq!(
            creature_url("https://pokeapi.co/api/v2/", 151),
            "https://pokeapi.co/api/v2/pokemon/151"
        );
    }
}
