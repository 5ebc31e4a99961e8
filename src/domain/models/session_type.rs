use serde::{Deserialize, Serialize};

/// Kind of therapy session a summary describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    InitialConsultation,
    FollowUpConsultation,
    TherapySession,
}

impl SessionType {
    pub const ALL: [SessionType; 3] = [
        SessionType::InitialConsultation,
        SessionType::FollowUpConsultation,
        SessionType::TherapySession,
    ];

    /// Wire value, also used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::InitialConsultation => "initial_consultation",
            SessionType::FollowUpConsultation => "follow_up_consultation",
            SessionType::TherapySession => "therapy_session",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SessionType::InitialConsultation => "Initial Consultation",
            SessionType::FollowUpConsultation => "Follow-Up Consultation",
            SessionType::TherapySession => "Therapy Session",
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown session type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(
            serde_json::to_string(&SessionType::FollowUpConsultation).unwrap(),
            "\"follow_up_consultation\""
        );
        for kind in SessionType::ALL {
            assert_eq!(kind.as_str().parse::<SessionType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_str_is_exact() {
        assert!("Therapy Session".parse::<SessionType>().is_err());
        assert!("THERAPY_SESSION".parse::<SessionType>().is_err());
        assert!("".parse::<SessionType>().is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(SessionType::InitialConsultation.to_string(), "Initial Consultation");
        assert_eq!(SessionType::TherapySession.display_name(), "Therapy Session");
    }
}
