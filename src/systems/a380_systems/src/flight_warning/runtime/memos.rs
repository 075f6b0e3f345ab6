use fxhash::{FxHashMap, FxHashSet};
use systems::flight_warning::warnings::{EcamCode, FlightPhases};

use super::arbitration::AlertArbitration;
use super::network::ConditionNetwork;
use super::procedures::{ProcedureDefinition, ProcedureRegistry};
use super::warnings::*;

pub(in crate::flight_warning::runtime) const EWD_MEMO_LINES: usize = 10;
pub(in crate::flight_warning::runtime) const PFD_MEMO_LINES: usize = 3;
pub(in crate::flight_warning::runtime) const EWD_LIMITATION_LINES: usize = 10;
pub(in crate::flight_warning::runtime) const PFD_LIMITATION_LINES: usize = 8;
pub(in crate::flight_warning::runtime) const STATUS_INFO_LINES: usize = 5;
pub(in crate::flight_warning::runtime) const STATUS_INOP_LINES: usize = 10;

const fn memo(raw: u32) -> EcamCode {
    EcamCode::from_raw(raw)
}

/// Memo lines which are repeated in the PFD memo area.
const PFD_MEMOS: &[EcamCode] = &[
    memo(322000001),
    memo(6002),
    memo(26001),
    memo(27001),
    memo(32501),
    memo(35001),
    memo(36001),
    memo(54502),
    memo(220000001),
    memo(220000002),
    memo(320000001),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MemoSide {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MemoRule {
    ToMemo,
    LdgMemo,
    LandAsap,
    ToInhibit,
    LdgInhibit,
    ParkBrake,
    RatOut,
    SpeedBrake,
    GroundSpoilersArmed,
    AutoBrakeOff,
    NwSteeringDisc,
    Ignition,
    EngAntiIce,
    WingAntiIce,
    IceNotDetected,
    SevereIce,
    ApuAvail,
    ApuBleed,
    LandingLights,
    Refuel,
    CabinReady,
    Signs,
}

impl MemoRule {
    /// The indices of the codes to display. Nothing is displayed when the memo is off.
    fn lines(&self, network: &ConditionNetwork) -> Vec<usize> {
        let n = network;
        let either = |condition: bool, done: usize, to_do: usize| {
            if condition {
                done
            } else {
                to_do
            }
        };
        let to_or_ldg_memo = n.to_memo.to_memo_computed() || n.ldg_memo.ldg_memo();
        let lines_if = |condition: bool, lines: &[usize]| {
            if condition {
                lines.to_vec()
            } else {
                vec![]
            }
        };

        match *self {
            MemoRule::ToMemo => lines_if(
                n.to_memo.to_memo_computed(),
                &[
                    0,
                    either(n.memo_inputs.seat_belts_on(), 2, 1),
                    either(n.speed_brake.ground_spoilers_armed(), 4, 3),
                    either(!n.surfaces.flaps_not_to_memo(), 6, 5),
                    either(n.memo_inputs.autobrake_rto(), 8, 7),
                    either(n.to_config_test.to_config_normal(), 10, 9),
                ],
            ),
            MemoRule::LdgMemo => lines_if(
                n.ldg_memo.ldg_memo(),
                &[
                    0,
                    either(n.memo_inputs.seat_belts_on(), 2, 1),
                    either(n.lg_downlocked.lg_downlocked(), 4, 3),
                    either(n.speed_brake.ground_spoilers_armed(), 6, 5),
                    either(n.flaps_slats.flaps_beyond_f(), 8, 7),
                ],
            ),
            MemoRule::LandAsap => {
                if n.land_asap.land_asap_red() {
                    vec![0]
                } else if n.land_asap.land_asap_amber() {
                    vec![1]
                } else {
                    vec![]
                }
            }
            MemoRule::ToInhibit => lines_if(n.flight_phase_inhibit.to_inhibit(), &[0]),
            MemoRule::LdgInhibit => lines_if(n.flight_phase_inhibit.ldg_inhibit(), &[0]),
            MemoRule::ParkBrake => lines_if(n.memo_inputs.park_brake_set(), &[0]),
            MemoRule::RatOut => lines_if(
                n.memo_inputs.rat_deployed(),
                &[either(n.ground.ground(), 1, 0)],
            ),
            MemoRule::SpeedBrake => lines_if(
                n.speed_brake.speed_brake_extended(),
                &[either(n.speed_brake.speed_brake_amber(), 1, 0)],
            ),
            MemoRule::GroundSpoilersArmed => lines_if(
                n.speed_brake.ground_spoilers_armed() && !to_or_ldg_memo,
                &[0],
            ),
            MemoRule::AutoBrakeOff => lines_if(n.memo_inputs.autobrake_off(), &[0]),
            MemoRule::NwSteeringDisc => lines_if(
                n.memo_inputs.nw_steering_disconnected(),
                &[either(
                    n.eng_running.eng_1_running() || n.eng_running.eng_2_running(),
                    0,
                    1,
                )],
            ),
            MemoRule::Ignition => lines_if(n.memo_inputs.eng_mode_selector_ignition(), &[0]),
            MemoRule::EngAntiIce => lines_if(
                n.anti_ice.eng_anti_ice_on(1) || n.anti_ice.eng_anti_ice_on(2),
                &[0],
            ),
            MemoRule::WingAntiIce => lines_if(n.anti_ice.wing_anti_ice_on(), &[0]),
            MemoRule::IceNotDetected => lines_if(n.anti_ice.ice_not_detected(), &[0]),
            MemoRule::SevereIce => lines_if(n.anti_ice.severe_ice_detected(), &[0]),
            MemoRule::ApuAvail => lines_if(
                n.memo_inputs.apu_avail() && !n.memo_inputs.apu_bleed_valve_open(),
                &[0],
            ),
            MemoRule::ApuBleed => lines_if(
                n.memo_inputs.apu_avail() && n.memo_inputs.apu_bleed_valve_open(),
                &[0],
            ),
            MemoRule::LandingLights => lines_if(n.memo_inputs.landing_lights_extended(), &[0]),
            MemoRule::Refuel => lines_if(n.memo_inputs.refuel_in_progress(), &[0]),
            MemoRule::CabinReady => lines_if(n.memo_inputs.cabin_ready(), &[0]),
            MemoRule::Signs => {
                let mut lines = vec![];
                if !to_or_ldg_memo {
                    if n.memo_inputs.seat_belts_on() {
                        lines.push(0);
                    }
                    if n.memo_inputs.no_smoking_on() {
                        lines.push(1);
                    }
                }
                lines
            }
        }
    }
}

struct MemoDefinition {
    side: MemoSide,
    rule: MemoRule,
    codes: &'static [EcamCode],
    inhibited_phases: FlightPhases,
}

impl MemoDefinition {
    const fn left(rule: MemoRule, codes: &'static [EcamCode]) -> Self {
        Self {
            side: MemoSide::Left,
            rule,
            codes,
            inhibited_phases: FlightPhases::NONE,
        }
    }

    const fn right(rule: MemoRule, codes: &'static [EcamCode]) -> Self {
        Self {
            side: MemoSide::Right,
            rule,
            codes,
            inhibited_phases: FlightPhases::NONE,
        }
    }

    const fn inhibited(mut self, phases: FlightPhases) -> Self {
        self.inhibited_phases = phases;
        self
    }
}

/// The memo table in display priority order.
const MEMOS: &[MemoDefinition] = &[
    MemoDefinition::left(
        MemoRule::ToMemo,
        &[
            memo(1001),
            memo(1002),
            memo(1003),
            memo(1006),
            memo(1007),
            memo(1008),
            memo(1009),
            memo(1010),
            memo(1011),
            memo(1012),
            memo(1013),
        ],
    ),
    MemoDefinition::left(
        MemoRule::LdgMemo,
        &[
            memo(2001),
            memo(2002),
            memo(2003),
            memo(2006),
            memo(2007),
            memo(2008),
            memo(2009),
            memo(2010),
            memo(2011),
        ],
    ),
    MemoDefinition::right(MemoRule::LandAsap, &[memo(35001), memo(36001)]),
    MemoDefinition::right(MemoRule::ToInhibit, &[memo(314000001)]),
    MemoDefinition::right(MemoRule::LdgInhibit, &[memo(314000002)]),
    MemoDefinition::right(MemoRule::ParkBrake, &[memo(320000002)])
        .inhibited(FlightPhases::of(&[3, 4, 5, 6, 7, 8])),
    MemoDefinition::right(MemoRule::RatOut, &[memo(242000001), memo(242000002)]),
    MemoDefinition::right(MemoRule::SpeedBrake, &[memo(6001), memo(6002)]),
    MemoDefinition::right(MemoRule::GroundSpoilersArmed, &[memo(5501)]),
    MemoDefinition::right(MemoRule::AutoBrakeOff, &[memo(320000001)])
        .inhibited(FlightPhases::of(&[1, 2, 3, 4, 5, 6, 7, 10])),
    MemoDefinition::right(
        MemoRule::NwSteeringDisc,
        &[memo(322000001), memo(322000002)],
    ),
    MemoDefinition::right(MemoRule::Ignition, &[memo(709000001)]),
    MemoDefinition::right(MemoRule::EngAntiIce, &[memo(26001)]),
    MemoDefinition::right(MemoRule::WingAntiIce, &[memo(27001)]),
    MemoDefinition::right(MemoRule::IceNotDetected, &[memo(27501)]),
    MemoDefinition::right(MemoRule::SevereIce, &[memo(308118601)]),
    MemoDefinition::right(MemoRule::ApuAvail, &[memo(17001)]),
    MemoDefinition::right(MemoRule::ApuBleed, &[memo(18001)]),
    MemoDefinition::right(MemoRule::LandingLights, &[memo(19001)]),
    MemoDefinition::right(MemoRule::Refuel, &[memo(5001)]),
    MemoDefinition::right(MemoRule::CabinReady, &[memo(230000004)]),
    MemoDefinition::right(MemoRule::Signs, &[memo(335000001), memo(335000002)]),
];

/// Orders `candidates` by `priority`, drops repeated codes and keeps at most `capacity` lines.
/// Codes without a priority go last in the order they were given.
pub(in crate::flight_warning::runtime) fn compose_lines(
    mut candidates: Vec<EcamCode>,
    priority: &FxHashMap<EcamCode, usize>,
    capacity: usize,
) -> Vec<EcamCode> {
    candidates.sort_by_key(|code| priority.get(code).copied().unwrap_or(usize::MAX));

    let mut seen = FxHashSet::default();
    candidates.retain(|code| seen.insert(*code));
    candidates.truncate(capacity);
    candidates
}

/// Collects every code of `lists` once, keeping the first occurrence.
fn unique(lists: impl Iterator<Item = &'static [EcamCode]>) -> Vec<EcamCode> {
    let mut seen = FxHashSet::default();
    lists
        .flat_map(|list| list.iter().copied())
        .filter(|code| seen.insert(*code))
        .collect()
}

fn truncated(mut codes: Vec<EcamCode>, capacity: usize) -> Vec<EcamCode> {
    codes.truncate(capacity);
    codes
}

/// The lines shown on the EWD, PFD and SD for one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(in crate::flight_warning::runtime) struct MessageLines {
    pub memo_left: Vec<EcamCode>,
    pub memo_right: Vec<EcamCode>,
    pub pfd_memo: Vec<EcamCode>,
    pub status_info: Vec<EcamCode>,
    pub inop_all_phases: Vec<EcamCode>,
    pub inop_appr_ldg: Vec<EcamCode>,
    pub limitations_all_phases: Vec<EcamCode>,
    pub limitations_appr_ldg: Vec<EcamCode>,
    pub limitations_pfd: Vec<EcamCode>,
}

/// Projects the memo table and the active procedures onto the display lines.
pub(in crate::flight_warning::runtime) struct MessageComposer {
    left_priority: FxHashMap<EcamCode, usize>,
    right_priority: FxHashMap<EcamCode, usize>,
    lines: MessageLines,
}

impl MessageComposer {
    pub fn new() -> Self {
        let priority = |side| {
            let mut priority = FxHashMap::default();
            for code in MEMOS
                .iter()
                .filter(|definition| definition.side == side)
                .flat_map(|definition| definition.codes.iter())
            {
                let next = priority.len();
                priority.entry(*code).or_insert(next);
            }
            priority
        };

        Self {
            left_priority: priority(MemoSide::Left),
            right_priority: priority(MemoSide::Right),
            lines: MessageLines::default(),
        }
    }

    pub fn update(
        &mut self,
        network: &ConditionNetwork,
        arbitration: &AlertArbitration,
        registry: &ProcedureRegistry,
    ) {
        let phase = network.flight_phases.flight_phase();
        let mut left = vec![];
        let mut right: Vec<EcamCode> = vec![];
        for definition in MEMOS
            .iter()
            .filter(|definition| !definition.inhibited_phases.contains(phase))
        {
            let lines = definition.rule.lines(network);
            if lines.is_empty() {
                continue;
            }

            let codes = lines
                .into_iter()
                .filter_map(|index| definition.codes.get(index).copied());
            match definition.side {
                MemoSide::Left => left.extend(codes),
                MemoSide::Right => {
                    right.retain(|code| !definition.codes.contains(code));
                    right.extend(codes);
                }
            }
        }

        let memo_left = compose_lines(left, &self.left_priority, EWD_MEMO_LINES);
        let memo_right = compose_lines(right, &self.right_priority, EWD_MEMO_LINES);
        let pfd_memo = memo_right
            .iter()
            .copied()
            .filter(|code| PFD_MEMOS.contains(code))
            .take(PFD_MEMO_LINES)
            .collect();

        let active: Vec<&ProcedureDefinition> = registry
            .definitions()
            .iter()
            .filter(|definition| arbitration.record(definition.code).is_some())
            .collect();
        let limitations_all_phases =
            unique(active.iter().map(|definition| definition.limitations_all_phases));
        let limitations_appr_ldg =
            unique(active.iter().map(|definition| definition.limitations_appr_ldg));
        let limitations_pfd = unique(
            active
                .iter()
                .map(|definition| definition.limitations_pfd)
                .chain(active.iter().map(|definition| definition.limitations_all_phases))
                .chain(active.iter().map(|definition| definition.limitations_appr_ldg)),
        );

        self.lines = MessageLines {
            memo_left,
            memo_right,
            pfd_memo,
            status_info: truncated(
                unique(active.iter().map(|definition| definition.info)),
                STATUS_INFO_LINES,
            ),
            inop_all_phases: truncated(
                unique(active.iter().map(|definition| definition.inop_all_phases)),
                STATUS_INOP_LINES,
            ),
            inop_appr_ldg: truncated(
                unique(active.iter().map(|definition| definition.inop_appr_ldg)),
                STATUS_INOP_LINES,
            ),
            limitations_all_phases: truncated(limitations_all_phases, EWD_LIMITATION_LINES),
            limitations_appr_ldg: truncated(limitations_appr_ldg, EWD_LIMITATION_LINES),
            limitations_pfd: truncated(limitations_pfd, PFD_LIMITATION_LINES),
        };
    }

    pub fn lines(&self) -> &MessageLines {
        &self.lines
    }
}

impl Default for MessageComposer {
    fn default() -> Self {
        Self::new()
    }
}
