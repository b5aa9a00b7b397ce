//! Declarative application forms. One static field table per position; the
//! client renders and validates all three through the same code path.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::application::Position;

/// Raw field state as typed by the applicant, keyed by field name.
pub type FormValues = BTreeMap<String, String>;

/// Field name → error message, empty when the form is submittable.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// Visible rows of the textarea.
    TextArea(u8),
    Select(&'static [SelectOption]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Minimum accepted value for `Number` fields.
    pub min: Option<i64>,
    /// Error shown when the field is missing or fails its minimum.
    pub message: &'static str,
    pub placeholder: Option<&'static str>,
    pub description: Option<&'static str>,
    /// Selecting this value permanently disables the whole form.
    pub disqualify_on: Option<&'static str>,
}

impl FieldSpec {
    const fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        message: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            min: None,
            message,
            placeholder: None,
            description: None,
            disqualify_on: None,
        }
    }

    const fn text(name: &'static str, label: &'static str, message: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text, message)
    }

    const fn number(
        name: &'static str,
        label: &'static str,
        min: i64,
        message: &'static str,
    ) -> Self {
        let mut spec = Self::new(name, label, FieldKind::Number, message);
        spec.min = Some(min);
        spec
    }

    const fn text_area(name: &'static str, label: &'static str, message: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea(4), message)
    }

    const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
        message: &'static str,
    ) -> Self {
        Self::new(name, label, FieldKind::Select(options), message)
    }

    const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    const fn rows(mut self, rows: u8) -> Self {
        self.kind = FieldKind::TextArea(rows);
        self
    }

    const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    const fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    const fn disqualify_on(mut self, value: &'static str) -> Self {
        self.disqualify_on = Some(value);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    pub position: Position,
    pub fields: &'static [FieldSpec],
}

const YES_NO: &[SelectOption] = &[
    SelectOption { value: "yes", label: "Yes" },
    SelectOption { value: "no", label: "No" },
];

const GIVEAWAY_INVOLVEMENT: &[SelectOption] = &[
    SelectOption { value: "no", label: "No" },
    SelectOption { value: "yes-not-eligible", label: "Yes — Not Eligible" },
];

const DISCORD_USER_ID: FieldSpec =
    FieldSpec::text("discordUserId", "Discord User ID", "Discord User ID is required")
        .placeholder("e.g., 123456789012345678");

const IN_GAME_NAME: FieldSpec =
    FieldSpec::text("inGameName", "In-game name", "In-game name is required");

const NETWORTH: FieldSpec =
    FieldSpec::text("networth", "Fakepixel networth", "Networth is required")
        .description("Example: 100M, 1B")
        .placeholder("e.g., 500M");

const TOTAL_PLAYTIME: FieldSpec =
    FieldSpec::text("totalPlaytime", "Total playtime", "Total playtime is required")
        .description("Example: 500 hours")
        .placeholder("e.g., 500 hours");

const GIVEAWAY_SERVERS: FieldSpec = FieldSpec::select(
    "involvedWithGiveawayServers",
    "Are you involved with any giveaway servers that host Fakepixel giveaways?",
    GIVEAWAY_INVOLVEMENT,
    "Please select an option",
)
.disqualify_on("yes-not-eligible");

const ADDITIONAL_INFO: FieldSpec =
    FieldSpec::text_area("additionalInfo", "Additional information", "This field is required")
        .optional()
        .rows(3);

static JUNIOR_HELPER: FormSchema = FormSchema {
    position: Position::JuniorHelper,
    fields: &[
        FieldSpec::number("age", "Age", 13, "Age must be 13 or older"),
        DISCORD_USER_ID,
        FieldSpec::select(
            "hasWorkingMicrophone",
            "Do you have a working microphone?",
            YES_NO,
            "Please select an option",
        ),
        FieldSpec::text_area("aboutYourself", "Tell us about yourself", "This field is required"),
        FieldSpec::text_area("whyHireYou", "Why should we hire you?", "This field is required"),
        FieldSpec::text_area(
            "whyStaffMember",
            "Why do you want to become a staff member on our server?",
            "This field is required",
        ),
        FieldSpec::text_area(
            "rulesKnowledge",
            "Are you familiar with the server rules and guidelines?",
            "This field is required",
        )
        .description(
            "If yes, explain how you would handle a situation where a member is breaking the rules.",
        ),
        FieldSpec::text_area("inGameInfo", "In-game information", "This field is required")
            .description("Include: In-game name (IGN), Rank, Fakepixel networth, Total playtime"),
        FieldSpec::text_area(
            "previousExperience",
            "Previous staff experience",
            "This field is required",
        )
        .description(
            "Have you been a staff member in another server? If yes, describe your strengths and weaknesses.",
        ),
        ADDITIONAL_INFO,
    ],
};

static SLAYER_CARRIER: FormSchema = FormSchema {
    position: Position::SlayerCarrier,
    fields: &[
        DISCORD_USER_ID,
        IN_GAME_NAME,
        NETWORTH,
        TOTAL_PLAYTIME,
        FieldSpec::number("combatLevel", "Combat level", 30, "Combat level must be 30 or higher")
            .description("Minimum: 30"),
        FieldSpec::text_area(
            "slayerBosses",
            "Slayer bosses and tiers you can confidently handle",
            "This field is required",
        ),
        FieldSpec::text(
            "weeklyAvailability",
            "Weekly availability for slayer carries",
            "Weekly availability is required",
        )
        .description("Example: 10–15 hours per week")
        .placeholder("e.g., 10-15 hours per week"),
        GIVEAWAY_SERVERS,
        ADDITIONAL_INFO,
    ],
};

static DUNGEON_CARRIER: FormSchema = FormSchema {
    position: Position::DungeonCarrier,
    fields: &[
        DISCORD_USER_ID,
        IN_GAME_NAME,
        NETWORTH,
        TOTAL_PLAYTIME,
        FieldSpec::number(
            "catacombsLevel",
            "Catacombs level",
            18,
            "Catacombs level must be 18 or higher",
        )
        .description("Minimum: 18"),
        FieldSpec::text(
            "dungeonClasses",
            "Dungeon classes you can play confidently",
            "Dungeon classes are required",
        )
        .description("Options include: Mage, Archer, Tank, Healer, Berserk")
        .placeholder("e.g., Mage, Archer"),
        FieldSpec::text(
            "classLevels",
            "Levels of those dungeon classes",
            "Class levels are required",
        )
        .placeholder("e.g., Mage: 35, Archer: 28"),
        FieldSpec::text("floorsCanCarry", "Floors you can carry", "This field is required")
            .description("Example: F5–F7, M1–M3")
            .placeholder("e.g., F5-F7, M1-M3"),
        FieldSpec::text("availability", "Availability for carries", "Availability is required")
            .description("Per day or per week")
            .placeholder("e.g., 2-3 hours per day"),
        GIVEAWAY_SERVERS,
        ADDITIONAL_INFO,
    ],
};

pub fn schema_for(position: Position) -> &'static FormSchema {
    match position {
        Position::JuniorHelper => &JUNIOR_HELPER,
        Position::SlayerCarrier => &SLAYER_CARRIER,
        Position::DungeonCarrier => &DUNGEON_CARRIER,
    }
}

fn trimmed<'v>(values: &'v FormValues, name: &str) -> &'v str {
    values.get(name).map(|value| value.trim()).unwrap_or("")
}

/// Synchronous whole-form validation. Returns one message per failing field;
/// an empty map means the form may be handed to the submit callback.
pub fn validate(schema: &FormSchema, values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in schema.fields {
        if !field.required {
            continue;
        }
        let raw = trimmed(values, field.name);
        let ok = match field.kind {
            FieldKind::Number => {
                let min = match field.min {
                    Some(min) => min,
                    None => i64::MIN,
                };
                raw.parse::<i64>().is_ok_and(|value| value >= min)
            }
            _ => !raw.is_empty(),
        };
        if !ok {
            errors.insert(field.name, field.message);
        }
    }
    errors
}

/// The permanent-disable rule: true when any field carrying a
/// `disqualify_on` value currently holds it. A disqualified form must never
/// reach the submit callback, whatever the other fields contain.
pub fn disqualified(schema: &FormSchema, values: &FormValues) -> bool {
    schema.fields.iter().any(|field| match field.disqualify_on {
        Some(value) => trimmed(values, field.name) == value,
        None => false,
    })
}

/// Build the submission payload. Number fields submit as JSON numbers;
/// empty fields are omitted.
pub fn to_payload(schema: &FormSchema, values: &FormValues) -> Map<String, Value> {
    let mut payload = Map::new();
    for field in schema.fields {
        let raw = trimmed(values, field.name);
        if raw.is_empty() {
            continue;
        }
        let value = match field.kind {
            FieldKind::Number => match raw.parse::<i64>() {
                Ok(number) => Value::from(number),
                Err(_) => continue,
            },
            _ => Value::String(raw.to_string()),
        };
        payload.insert(field.name.to_string(), value);
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::{FormValues, disqualified, schema_for, to_payload, validate};
    use crate::application::Position;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn filled_slayer() -> FormValues {
        values(&[
            ("discordUserId", "123456789012345678"),
            ("inGameName", "SlayerMain"),
            ("networth", "750M"),
            ("totalPlaytime", "600 hours"),
            ("combatLevel", "42"),
            ("slayerBosses", "Revenant T5, Tarantula T4"),
            ("weeklyAvailability", "12 hours per week"),
            ("involvedWithGiveawayServers", "no"),
        ])
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let schema = schema_for(Position::SlayerCarrier);
        let errors = validate(schema, &FormValues::new());
        let required: Vec<&str> = schema
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(errors.len(), required.len());
        for name in required {
            assert!(errors.contains_key(name), "missing error for {name}");
        }
        assert!(!errors.contains_key("additionalInfo"));
    }

    #[test]
    fn filled_form_validates_clean() {
        let schema = schema_for(Position::SlayerCarrier);
        assert!(validate(schema, &filled_slayer()).is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let schema = schema_for(Position::SlayerCarrier);
        let mut vals = filled_slayer();
        vals.insert("inGameName".into(), "   ".into());
        let errors = validate(schema, &vals);
        assert_eq!(errors.get("inGameName"), Some(&"In-game name is required"));
    }

    #[test]
    fn numeric_minimums_are_enforced_at_the_boundary() {
        let cases = [
            (Position::JuniorHelper, "age", 13_i64, "Age must be 13 or older"),
            (Position::SlayerCarrier, "combatLevel", 30, "Combat level must be 30 or higher"),
            (Position::DungeonCarrier, "catacombsLevel", 18, "Catacombs level must be 18 or higher"),
        ];
        for (position, name, min, message) in cases {
            let schema = schema_for(position);

            let below = values(&[(name, &(min - 1).to_string())]);
            assert_eq!(validate(schema, &below).get(name), Some(&message));

            let at_min = values(&[(name, &min.to_string())]);
            assert!(!validate(schema, &at_min).contains_key(name));

            let garbage = values(&[(name, "lots")]);
            assert_eq!(validate(schema, &garbage).get(name), Some(&message));
        }
    }

    #[test]
    fn missing_select_reports_select_message() {
        let schema = schema_for(Position::JuniorHelper);
        let errors = validate(schema, &FormValues::new());
        assert_eq!(errors.get("hasWorkingMicrophone"), Some(&"Please select an option"));
    }

    #[test]
    fn giveaway_involvement_disqualifies_both_carrier_forms() {
        for position in [Position::SlayerCarrier, Position::DungeonCarrier] {
            let schema = schema_for(position);
            let mut vals = filled_slayer();
            assert!(!disqualified(schema, &vals));
            vals.insert("involvedWithGiveawayServers".into(), "yes-not-eligible".into());
            assert!(disqualified(schema, &vals));
        }
        // The staff form has no such rule.
        let junior = schema_for(Position::JuniorHelper);
        let vals = values(&[("involvedWithGiveawayServers", "yes-not-eligible")]);
        assert!(!disqualified(junior, &vals));
    }

    #[test]
    fn payload_converts_numbers_and_drops_empty_fields() {
        let schema = schema_for(Position::SlayerCarrier);
        let mut vals = filled_slayer();
        vals.insert("additionalInfo".into(), "".into());
        let payload = to_payload(schema, &vals);
        assert_eq!(payload["combatLevel"], 42);
        assert_eq!(payload["inGameName"], "SlayerMain");
        assert!(!payload.contains_key("additionalInfo"));
    }
}
