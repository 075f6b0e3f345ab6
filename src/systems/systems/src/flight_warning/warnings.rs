use serde::{Serialize, Serializer};
use std::fmt::{Debug, Display, Formatter};

/// The type of message encoded in the third and fourth digit of an ECAM code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeKind {
    Memo = 0,
    Normal = 1,
    Info = 2,
    InopSys = 3,
    Limitation = 4,
    AbnormalSensed = 8,
    AbnormalNonSensed = 9,
}

/// A nine digit ECAM message key. Abnormal procedures, status lines and limitations follow the
/// `AAKKNNNNN` layout (ATA chapter, kind, number), memos use free-form keys.
#[derive(Eq, PartialEq, Hash, Copy, Clone, PartialOrd, Ord)]
pub struct EcamCode(u32);

impl EcamCode {
    pub const fn new(ata: u8, kind: CodeKind, id: u32) -> Self {
        Self(ata as u32 * 10_000_000 + kind as u32 * 100_000 + id % 100_000)
    }

    /// Wraps a key which does not follow the kind layout, such as most memos.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw % 1_000_000_000)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    pub fn ata(&self) -> u8 {
        (self.0 / 10_000_000) as u8
    }

    pub fn kind(&self) -> Option<CodeKind> {
        match (self.0 / 100_000) % 100 {
            0 => Some(CodeKind::Memo),
            1 => Some(CodeKind::Normal),
            2 => Some(CodeKind::Info),
            3 => Some(CodeKind::InopSys),
            4 => Some(CodeKind::Limitation),
            8 => Some(CodeKind::AbnormalSensed),
            9 => Some(CodeKind::AbnormalNonSensed),
            _ => None,
        }
    }
}

impl Display for EcamCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

impl Debug for EcamCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

impl Serialize for EcamCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Advisory,
    Caution,
    Warning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuralWarning {
    None,
    ContinuousRepetitiveChime,
    SingleChime,
}

impl AuralWarning {
    /// Warnings sound the continuous repetitive chime, cautions a single chime.
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Warning => AuralWarning::ContinuousRepetitiveChime,
            Severity::Caution => AuralWarning::SingleChime,
            Severity::Advisory => AuralWarning::None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlightPhase {
    ElecPwr = 1,
    FirstEngineStarted = 2,
    FirstEngineTakeOffPower = 3,
    AtOrAbove80Knots = 4,
    LiftOff = 5,
    AtOrAbove1500Feet = 6,
    AtOrBelow800Feet = 7,
    TouchDown = 8,
    AtOrBelow80Knots = 9,
    EnginesShutdown = 10,
}

impl FlightPhase {
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(FlightPhase::ElecPwr),
            2 => Some(FlightPhase::FirstEngineStarted),
            3 => Some(FlightPhase::FirstEngineTakeOffPower),
            4 => Some(FlightPhase::AtOrAbove80Knots),
            5 => Some(FlightPhase::LiftOff),
            6 => Some(FlightPhase::AtOrAbove1500Feet),
            7 => Some(FlightPhase::AtOrBelow800Feet),
            8 => Some(FlightPhase::TouchDown),
            9 => Some(FlightPhase::AtOrBelow80Knots),
            10 => Some(FlightPhase::EnginesShutdown),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }
}

impl Default for FlightPhase {
    fn default() -> Self {
        FlightPhase::ElecPwr
    }
}

impl Display for FlightPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for FlightPhase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// A set of flight phases, stored as a bit mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlightPhases(u16);

impl FlightPhases {
    pub const NONE: FlightPhases = FlightPhases(0);

    /// Builds the set from phase numbers. Numbers outside of 1 to 10 are ignored.
    pub const fn of(numbers: &[u8]) -> Self {
        let mut mask = 0;
        let mut i = 0;
        while i < numbers.len() {
            let number = numbers[i];
            if number >= 1 && number <= 10 {
                mask |= 1 << number;
            }
            i += 1;
        }
        Self(mask)
    }

    pub fn all() -> Self {
        Self::of(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])
    }

    pub fn contains(&self, phase: FlightPhase) -> bool {
        self.0 & (1 << phase.number()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
