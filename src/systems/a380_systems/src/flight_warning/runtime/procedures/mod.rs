use std::error::Error;
use std::fmt::{Display, Formatter};

use fxhash::FxHashMap;
use serde::Serialize;
use systems::flight_warning::warnings::{AuralWarning, EcamCode, FlightPhases, Severity};
use tracing::warn;

use super::network::ConditionNetwork;

mod rules;
mod table;

pub(in crate::flight_warning::runtime) use rules::ProcedureRule;
pub(in crate::flight_warning::runtime) use table::A380_PROCEDURES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::flight_warning::runtime) enum ItemKind {
    /// Completion is read back from the aircraft.
    Sensed,

    /// Completion is confirmed by the crew.
    Unsensed,

    /// A condition line such as "IF NO RELIGHT", it has no completion of its own.
    Condition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ItemColor {
    Cyan,
    White,
    Amber,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::flight_warning::runtime) struct ChecklistItem {
    pub kind: ItemKind,
    pub level: u8,
    pub color: ItemColor,
}

impl ChecklistItem {
    pub const fn sensed(level: u8) -> Self {
        Self {
            kind: ItemKind::Sensed,
            level,
            color: ItemColor::Cyan,
        }
    }

    pub const fn unsensed(level: u8) -> Self {
        Self {
            kind: ItemKind::Unsensed,
            level,
            color: ItemColor::Cyan,
        }
    }

    pub const fn condition(level: u8) -> Self {
        Self {
            kind: ItemKind::Condition,
            level,
            color: ItemColor::White,
        }
    }

    pub const fn amber(self) -> Self {
        Self {
            color: ItemColor::Amber,
            ..self
        }
    }
}

/// One abnormal procedure. The text of the title and of the checklist lines is looked up by the
/// displays through the code.
#[derive(Clone, Copy, Debug)]
pub(in crate::flight_warning::runtime) struct ProcedureDefinition {
    pub code: EcamCode,
    pub rule: ProcedureRule,
    pub severity: Severity,

    /// Overrides the aural warning which goes with the severity.
    pub aural: Option<AuralWarning>,

    /// Non-cancellable warnings keep the master warning on until the condition is gone.
    pub cancellable: bool,
    pub inhibited_phases: FlightPhases,
    pub overridden_by: &'static [EcamCode],
    pub items: &'static [ChecklistItem],
    pub info: &'static [EcamCode],
    pub inop_all_phases: &'static [EcamCode],
    pub inop_appr_ldg: &'static [EcamCode],
    pub limitations_all_phases: &'static [EcamCode],
    pub limitations_appr_ldg: &'static [EcamCode],
    pub limitations_pfd: &'static [EcamCode],
}

impl ProcedureDefinition {
    pub fn aural_warning(&self) -> AuralWarning {
        self.aural
            .unwrap_or_else(|| AuralWarning::for_severity(self.severity))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemState {
    Completed,
    Shown,
    Active,
}

impl Display for ItemState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemState::Completed => write!(f, "completed"),
            ItemState::Shown => write!(f, "shown"),
            ItemState::Active => write!(f, "active"),
        }
    }
}

/// A procedure table which cannot be arbitrated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateCode(EcamCode),
    ItemStateLengthMismatch {
        code: EcamCode,
        kind: ItemState,
        expected: usize,
        actual: usize,
    },
    UnknownOverride {
        code: EcamCode,
        missing: EcamCode,
    },
    SelfOverride(EcamCode),
    OverrideCycle(Vec<EcamCode>),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateCode(code) => {
                write!(f, "procedure {} is defined more than once", code)
            }
            RegistryError::ItemStateLengthMismatch {
                code,
                kind,
                expected,
                actual,
            } => write!(
                f,
                "procedure {} has {} checklist items but its {} states have {} entries",
                code, expected, kind, actual
            ),
            RegistryError::UnknownOverride { code, missing } => write!(
                f,
                "procedure {} is overridden by {} which is not defined",
                code, missing
            ),
            RegistryError::SelfOverride(code) => {
                write!(f, "procedure {} overrides itself", code)
            }
            RegistryError::OverrideCycle(codes) => {
                write!(f, "override cycle:")?;
                for code in codes {
                    write!(f, " {}", code)?;
                }
                Ok(())
            }
        }
    }
}

impl Error for RegistryError {}

/// The validated procedure table. The order of the definitions is the order in which new alerts
/// are detected and active alerts are reported.
pub struct ProcedureRegistry {
    definitions: Vec<ProcedureDefinition>,
    indices: FxHashMap<EcamCode, usize>,
    overriders: Vec<Vec<usize>>,
}

impl ProcedureRegistry {
    pub(crate) fn a380() -> Result<Self, RegistryError> {
        Self::new(A380_PROCEDURES, &ConditionNetwork::default())
    }

    /// Validates the definitions. The network is only used to check the shape of the item states
    /// each rule produces.
    pub(in crate::flight_warning::runtime) fn new(
        definitions: &[ProcedureDefinition],
        network: &ConditionNetwork,
    ) -> Result<Self, RegistryError> {
        Self::validate(definitions, network).map_err(|error| {
            warn!(%error, "Refusing to load the procedure table");
            error
        })
    }

    fn validate(
        definitions: &[ProcedureDefinition],
        network: &ConditionNetwork,
    ) -> Result<Self, RegistryError> {
        let mut indices = FxHashMap::default();
        for (index, definition) in definitions.iter().enumerate() {
            if indices.insert(definition.code, index).is_some() {
                return Err(RegistryError::DuplicateCode(definition.code));
            }
        }

        for definition in definitions {
            check_item_states(definition, network)?;
        }

        let mut overriders = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let mut resolved = Vec::with_capacity(definition.overridden_by.len());
            for overrider in definition.overridden_by {
                if *overrider == definition.code {
                    return Err(RegistryError::SelfOverride(definition.code));
                }
                match indices.get(overrider) {
                    Some(index) => resolved.push(*index),
                    None => {
                        return Err(RegistryError::UnknownOverride {
                            code: definition.code,
                            missing: *overrider,
                        })
                    }
                }
            }
            overriders.push(resolved);
        }

        if let Some(cycle) = find_override_cycle(&overriders) {
            return Err(RegistryError::OverrideCycle(
                cycle
                    .into_iter()
                    .map(|index| definitions[index].code)
                    .collect(),
            ));
        }

        Ok(Self {
            definitions: definitions.to_vec(),
            indices,
            overriders,
        })
    }

    pub(in crate::flight_warning::runtime) fn definitions(&self) -> &[ProcedureDefinition] {
        &self.definitions
    }

    pub(in crate::flight_warning::runtime) fn definition(
        &self,
        index: usize,
    ) -> &ProcedureDefinition {
        &self.definitions[index]
    }

    pub(in crate::flight_warning::runtime) fn index_of(&self, code: EcamCode) -> Option<usize> {
        self.indices.get(&code).copied()
    }

    /// The indices of the procedures which mask the procedure at `index`.
    pub(in crate::flight_warning::runtime) fn overriders(&self, index: usize) -> &[usize] {
        &self.overriders[index]
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn contains(&self, code: EcamCode) -> bool {
        self.indices.contains_key(&code)
    }
}

fn check_item_states(
    definition: &ProcedureDefinition,
    network: &ConditionNetwork,
) -> Result<(), RegistryError> {
    let expected = definition.items.len();
    let mismatch = |kind, actual| RegistryError::ItemStateLengthMismatch {
        code: definition.code,
        kind,
        expected,
        actual,
    };

    let completed = definition.rule.completed_items(network).len();
    if completed != expected {
        return Err(mismatch(ItemState::Completed, completed));
    }
    if let Some(shown) = definition.rule.shown_items(network) {
        if shown.len() != expected {
            return Err(mismatch(ItemState::Shown, shown.len()));
        }
    }
    if let Some(active) = definition.rule.active_items(network) {
        if active.len() != expected {
            return Err(mismatch(ItemState::Active, active.len()));
        }
    }

    Ok(())
}

#[derive(Clone, Copy, PartialEq)]
enum Visit {
    New,
    InProgress,
    Done,
}

/// Depth first search through the override edges. Returns the procedures on the first cycle found.
fn find_override_cycle(overriders: &[Vec<usize>]) -> Option<Vec<usize>> {
    fn visit(
        node: usize,
        overriders: &[Vec<usize>],
        state: &mut [Visit],
        path: &mut Vec<usize>,
    ) -> Option<Vec<usize>> {
        state[node] = Visit::InProgress;
        path.push(node);

        for &next in &overriders[node] {
            match state[next] {
                Visit::InProgress => {
                    let start = path.iter().position(|&n| n == next).unwrap_or(0);
                    return Some(path[start..].to_vec());
                }
                Visit::New => {
                    if let Some(cycle) = visit(next, overriders, state, path) {
                        return Some(cycle);
                    }
                }
                Visit::Done => {}
            }
        }

        path.pop();
        state[node] = Visit::Done;
        None
    }

    let mut state = vec![Visit::New; overriders.len()];
    let mut path = Vec::new();
    (0..overriders.len()).find_map(|node| {
        if state[node] == Visit::New {
            visit(node, overriders, &mut state, &mut path)
        } else {
            None
        }
    })
}
