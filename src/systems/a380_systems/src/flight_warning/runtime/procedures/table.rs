use super::{ChecklistItem, ProcedureDefinition, ProcedureRule};
use systems::flight_warning::warnings::{
    AuralWarning, CodeKind, EcamCode, FlightPhases, Severity,
};

const fn abnormal(ata: u8, id: u32) -> EcamCode {
    EcamCode::new(ata, CodeKind::AbnormalSensed, id)
}

const fn inop(ata: u8, id: u32) -> EcamCode {
    EcamCode::new(ata, CodeKind::InopSys, id)
}

const fn info(ata: u8, id: u32) -> EcamCode {
    EcamCode::new(ata, CodeKind::Info, id)
}

const fn limitation(ata: u8, id: u32) -> EcamCode {
    EcamCode::new(ata, CodeKind::Limitation, id)
}

impl ProcedureDefinition {
    const fn new(code: EcamCode, rule: ProcedureRule, severity: Severity) -> Self {
        Self {
            code,
            rule,
            severity,
            aural: None,
            cancellable: true,
            inhibited_phases: FlightPhases::NONE,
            overridden_by: &[],
            items: &[],
            info: &[],
            inop_all_phases: &[],
            inop_appr_ldg: &[],
            limitations_all_phases: &[],
            limitations_appr_ldg: &[],
            limitations_pfd: &[],
        }
    }

    const fn warning(code: EcamCode, rule: ProcedureRule) -> Self {
        Self::new(code, rule, Severity::Warning)
    }

    const fn caution(code: EcamCode, rule: ProcedureRule) -> Self {
        Self::new(code, rule, Severity::Caution).inhibited(CAUTION_INHIBITED)
    }

    const fn advisory(code: EcamCode, rule: ProcedureRule) -> Self {
        Self::new(code, rule, Severity::Advisory).inhibited(CAUTION_INHIBITED)
    }

    const fn aural(self, aural: AuralWarning) -> Self {
        Self {
            aural: Some(aural),
            ..self
        }
    }

    const fn not_cancellable(self) -> Self {
        Self {
            cancellable: false,
            ..self
        }
    }

    const fn inhibited(self, inhibited_phases: FlightPhases) -> Self {
        Self {
            inhibited_phases,
            ..self
        }
    }

    const fn overridden_by(self, overridden_by: &'static [EcamCode]) -> Self {
        Self {
            overridden_by,
            ..self
        }
    }

    const fn items(self, items: &'static [ChecklistItem]) -> Self {
        Self { items, ..self }
    }

    const fn info(self, info: &'static [EcamCode]) -> Self {
        Self { info, ..self }
    }

    const fn inop(self, inop_all_phases: &'static [EcamCode]) -> Self {
        Self {
            inop_all_phases,
            ..self
        }
    }

    const fn inop_appr_ldg(self, inop_appr_ldg: &'static [EcamCode]) -> Self {
        Self {
            inop_appr_ldg,
            ..self
        }
    }

    const fn limitations(self, limitations_all_phases: &'static [EcamCode]) -> Self {
        Self {
            limitations_all_phases,
            ..self
        }
    }

    const fn limitations_appr_ldg(self, limitations_appr_ldg: &'static [EcamCode]) -> Self {
        Self {
            limitations_appr_ldg,
            ..self
        }
    }

    const fn limitations_pfd(self, limitations_pfd: &'static [EcamCode]) -> Self {
        Self {
            limitations_pfd,
            ..self
        }
    }
}

/// Cautions stay silent during the take off run and the landing.
const CAUTION_INHIBITED: FlightPhases = FlightPhases::of(&[3, 4, 5, 7, 8]);
const AIR_DATA_INHIBITED: FlightPhases = FlightPhases::of(&[4, 5, 7, 8]);
const ICE_INHIBITED: FlightPhases = FlightPhases::of(&[1, 2, 3, 4, 8, 9, 10]);

const ACSC_1_2_FAULT: EcamCode = abnormal(21, 12);
const PACK_1_2_FAULT: EcamCode = abnormal(21, 3);
const CPC_1_2_FAULT: EcamCode = abnormal(21, 52);
const GEN_EMER_CONFIG: EcamCode = abnormal(24, 3);
const G_Y_SYS_LO_PR: EcamCode = abnormal(29, 3);
const LGCIU_1_2_FAULT: EcamCode = abnormal(32, 7);
const LG_NOT_DOWN_NO_CANCEL: EcamCode = abnormal(32, 1);
const ADR_1_2_3_FAULT: EcamCode = abnormal(34, 4);

const ONE_ACTION: &[ChecklistItem] = &[ChecklistItem::unsensed(0)];

const GEN_FAULT_ITEMS: &[ChecklistItem] = &[
    // GEN OFF THEN ON
    ChecklistItem::unsensed(0),
    // IF UNSUCCESSFUL
    ChecklistItem::condition(0),
    // GEN OFF
    ChecklistItem::unsensed(1),
];

const ENG_FIRE_ITEMS: &[ChecklistItem] = &[
    // FIRE P/B PUSH
    ChecklistItem::sensed(0),
    // AGENT 1 DISCH
    ChecklistItem::sensed(0),
    // IF FIRE AFTER 30 S
    ChecklistItem::condition(0),
    // AGENT 2 DISCH
    ChecklistItem::sensed(1),
    // ATC NOTIFY
    ChecklistItem::unsensed(0),
];

const PACK_OFF_ITEMS: &[ChecklistItem] = &[
    // PACK OFF
    ChecklistItem::sensed(0),
];

const HYD_LO_PR_ITEMS: &[ChecklistItem] = &[
    // ENG PUMPS OFF
    ChecklistItem::sensed(0),
];

/// The A380 abnormal procedures. The order is the detection order of simultaneous alerts.
pub(in crate::flight_warning::runtime) const A380_PROCEDURES: &[ProcedureDefinition] = &[
    // 26 FIRE
    ProcedureDefinition::warning(abnormal(26, 1), ProcedureRule::EngFire(1))
        .not_cancellable()
        .items(ENG_FIRE_ITEMS)
        .info(&[info(26, 1)])
        .inop(&[inop(26, 1)]),
    ProcedureDefinition::warning(abnormal(26, 2), ProcedureRule::EngFire(2))
        .not_cancellable()
        .items(ENG_FIRE_ITEMS)
        .info(&[info(26, 1)])
        .inop(&[inop(26, 2)]),
    ProcedureDefinition::warning(abnormal(26, 3), ProcedureRule::ApuFire)
        .not_cancellable()
        .items(&[
            // APU FIRE P/B PUSH
            ChecklistItem::sensed(0),
            // AGENT DISCH
            ChecklistItem::sensed(0),
            // MASTER SW OFF
            ChecklistItem::unsensed(0),
        ])
        .inop(&[inop(49, 1)]),
    // 70 ENGINES
    ProcedureDefinition::warning(abnormal(70, 1), ProcedureRule::EngDualFailure)
        .items(&[
            // IF NO RELIGHT
            ChecklistItem::condition(0).amber(),
            // EMER ELEC PWR MAN ON
            ChecklistItem::unsensed(1),
            // OPTIMUM RELIGHT SPD
            ChecklistItem::unsensed(1),
            // ENG MODE SEL IGN
            ChecklistItem::sensed(0),
        ])
        .info(&[info(70, 1)])
        .limitations(&[limitation(70, 1)])
        .limitations_pfd(&[limitation(22, 1)]),
    // 32 LANDING GEAR
    ProcedureDefinition::warning(LG_NOT_DOWN_NO_CANCEL, ProcedureRule::LgNotDownNoCancel)
        .not_cancellable(),
    ProcedureDefinition::warning(abnormal(32, 2), ProcedureRule::LgNotDown)
        .overridden_by(&[LG_NOT_DOWN_NO_CANCEL]),
    // 34 OVERSPEED
    ProcedureDefinition::warning(abnormal(34, 20), ProcedureRule::OverspeedVmo)
        .aural(AuralWarning::ContinuousRepetitiveChime)
        .not_cancellable()
        .items(ONE_ACTION),
    ProcedureDefinition::warning(abnormal(34, 21), ProcedureRule::OverspeedVle)
        .aural(AuralWarning::ContinuousRepetitiveChime)
        .not_cancellable()
        .items(ONE_ACTION),
    ProcedureDefinition::warning(abnormal(34, 22), ProcedureRule::OverspeedVfe)
        .aural(AuralWarning::ContinuousRepetitiveChime)
        .not_cancellable()
        .items(ONE_ACTION),
    // 27 T.O CONFIG
    ProcedureDefinition::warning(abnormal(27, 1), ProcedureRule::ConfigFlaps),
    ProcedureDefinition::warning(abnormal(27, 2), ProcedureRule::ConfigSlats),
    ProcedureDefinition::warning(abnormal(27, 3), ProcedureRule::ConfigSpeedBrakes),
    ProcedureDefinition::warning(abnormal(27, 4), ProcedureRule::ConfigPitchTrim),
    ProcedureDefinition::warning(abnormal(27, 6), ProcedureRule::ConfigRudderTrim),
    ProcedureDefinition::warning(abnormal(32, 3), ProcedureRule::ConfigParkBrake),
    // 24 ELEC
    ProcedureDefinition::warning(GEN_EMER_CONFIG, ProcedureRule::ElecEmerConfig)
        .items(&[
            // EMER ELEC PWR MAN ON
            ChecklistItem::unsensed(0),
            // IF NO GEN RECOVERY
            ChecklistItem::condition(0),
            // FUEL X FEED ON
            ChecklistItem::unsensed(1),
        ])
        .info(&[info(24, 1)])
        .inop(&[inop(24, 3), inop(29, 21)])
        .inop_appr_ldg(&[inop(32, 21)])
        .limitations(&[limitation(24, 1)])
        .limitations_appr_ldg(&[limitation(24, 2)])
        .limitations_pfd(&[limitation(24, 1)]),
    // 29 HYDRAULICS
    ProcedureDefinition::warning(G_Y_SYS_LO_PR, ProcedureRule::GreenYellowSysLoPr)
        .inhibited(AIR_DATA_INHIBITED)
        .items(&[
            // ENG 1 PUMPS OFF
            ChecklistItem::sensed(0),
            // ENG 2 PUMPS OFF
            ChecklistItem::sensed(0),
            // FOR LDG
            ChecklistItem::condition(0),
            // L/G GRVTY EXTN
            ChecklistItem::unsensed(1),
        ])
        .info(&[info(29, 1)])
        .inop(&[inop(29, 21), inop(29, 22)])
        .inop_appr_ldg(&[inop(32, 21)])
        .limitations(&[limitation(29, 1)])
        .limitations_appr_ldg(&[limitation(29, 2)])
        .limitations_pfd(&[limitation(29, 1)]),
    ProcedureDefinition::caution(abnormal(29, 1), ProcedureRule::GreenSysLoPr)
        .overridden_by(&[G_Y_SYS_LO_PR])
        .items(HYD_LO_PR_ITEMS)
        .inop(&[inop(29, 21)]),
    ProcedureDefinition::caution(abnormal(29, 2), ProcedureRule::YellowSysLoPr)
        .overridden_by(&[G_Y_SYS_LO_PR])
        .items(HYD_LO_PR_ITEMS)
        .inop(&[inop(29, 22)]),
    // 34 NAVIGATION
    ProcedureDefinition::warning(ADR_1_2_3_FAULT, ProcedureRule::Adr123Fault)
        .inhibited(AIR_DATA_INHIBITED)
        .items(&[
            // AIR DATA SWTG
            ChecklistItem::unsensed(0),
            // STBY INST
            ChecklistItem::unsensed(0),
            // IF SPEED UNRELIABLE
            ChecklistItem::condition(0),
            // UNRELIABLE SPD PROC
            ChecklistItem::unsensed(1),
        ])
        .info(&[info(34, 2)])
        .inop(&[inop(34, 4)])
        .limitations(&[limitation(34, 1)])
        .limitations_pfd(&[limitation(34, 1)]),
    ProcedureDefinition::caution(abnormal(34, 1), ProcedureRule::AdrFault(1))
        .inhibited(AIR_DATA_INHIBITED)
        .overridden_by(&[ADR_1_2_3_FAULT])
        .items(ONE_ACTION)
        .inop(&[inop(34, 1)]),
    ProcedureDefinition::caution(abnormal(34, 2), ProcedureRule::AdrFault(2))
        .inhibited(AIR_DATA_INHIBITED)
        .overridden_by(&[ADR_1_2_3_FAULT])
        .items(ONE_ACTION)
        .inop(&[inop(34, 2)]),
    ProcedureDefinition::caution(abnormal(34, 3), ProcedureRule::AdrFault(3))
        .inhibited(AIR_DATA_INHIBITED)
        .overridden_by(&[ADR_1_2_3_FAULT])
        .items(ONE_ACTION)
        .inop(&[inop(34, 3)]),
    ProcedureDefinition::caution(abnormal(34, 5), ProcedureRule::IrFault(1))
        .aural(AuralWarning::None)
        .inhibited(AIR_DATA_INHIBITED)
        .inop(&[inop(34, 5)]),
    ProcedureDefinition::caution(abnormal(34, 6), ProcedureRule::IrFault(2))
        .aural(AuralWarning::None)
        .inhibited(AIR_DATA_INHIBITED)
        .inop(&[inop(34, 6)]),
    ProcedureDefinition::caution(abnormal(34, 7), ProcedureRule::IrFault(3))
        .aural(AuralWarning::None)
        .inhibited(AIR_DATA_INHIBITED)
        .inop(&[inop(34, 7)]),
    ProcedureDefinition::advisory(abnormal(34, 8), ProcedureRule::RaFault(1))
        .inop(&[inop(34, 8)]),
    ProcedureDefinition::advisory(abnormal(34, 9), ProcedureRule::RaFault(2))
        .inop(&[inop(34, 9)]),
    ProcedureDefinition::advisory(abnormal(34, 10), ProcedureRule::RaFault(3))
        .inop(&[inop(34, 10)]),
    // 22 T.O SPEEDS
    ProcedureDefinition::caution(abnormal(22, 1), ProcedureRule::ToSpeedsNotInserted)
        .inhibited(FlightPhases::NONE),
    ProcedureDefinition::caution(abnormal(22, 2), ProcedureRule::ToSpeedsTooLow)
        .inhibited(FlightPhases::NONE)
        .items(ONE_ACTION),
    ProcedureDefinition::caution(abnormal(22, 3), ProcedureRule::ToV1VrV2Disagree)
        .inhibited(FlightPhases::NONE),
    ProcedureDefinition::caution(abnormal(22, 4), ProcedureRule::ToFlapsFmsDisagree)
        .inhibited(FlightPhases::NONE)
        .items(&[
            // FLAPS LEVER / T.O DATA CHECK
            ChecklistItem::unsensed(0),
        ]),
    // 70 THRUST LEVERS
    ProcedureDefinition::caution(abnormal(70, 2), ProcedureRule::ThrLeversNotSet)
        .inhibited(FlightPhases::NONE)
        .items(ONE_ACTION),
    // 27 SPEED BRAKES
    ProcedureDefinition::caution(abnormal(27, 5), ProcedureRule::SpeedBrakesStillOut)
        .items(&[
            // SPEED BRAKES LEVER RETRACT
            ChecklistItem::sensed(0),
        ]),
    // 24 GENERATORS
    ProcedureDefinition::caution(abnormal(24, 1), ProcedureRule::Gen1Fault)
        .overridden_by(&[GEN_EMER_CONFIG])
        .items(GEN_FAULT_ITEMS)
        .inop(&[inop(24, 1)]),
    ProcedureDefinition::caution(abnormal(24, 2), ProcedureRule::Gen2Fault)
        .overridden_by(&[GEN_EMER_CONFIG])
        .items(GEN_FAULT_ITEMS)
        .inop(&[inop(24, 2)]),
    // 21 AIR CONDITIONING
    ProcedureDefinition::caution(abnormal(21, 20), ProcedureRule::DuctOverheat)
        .items(&[
            // HOT AIR OFF
            ChecklistItem::unsensed(0),
            // WHEN DUCT TEMP < 70 C: HOT AIR ON
            ChecklistItem::unsensed(1),
        ])
        .info(&[info(21, 1)]),
    ProcedureDefinition::caution(ACSC_1_2_FAULT, ProcedureRule::Acsc12Fault)
        .items(ONE_ACTION)
        .inop(&[inop(21, 1), inop(21, 2)]),
    ProcedureDefinition::caution(abnormal(21, 10), ProcedureRule::Acsc1Fault)
        .overridden_by(&[ACSC_1_2_FAULT])
        .inop(&[inop(21, 1)]),
    ProcedureDefinition::caution(abnormal(21, 11), ProcedureRule::Acsc2Fault)
        .overridden_by(&[ACSC_1_2_FAULT])
        .inop(&[inop(21, 2)]),
    ProcedureDefinition::advisory(abnormal(21, 30), ProcedureRule::AcscLaneFault),
    ProcedureDefinition::caution(abnormal(21, 40), ProcedureRule::TrimAirFault),
    ProcedureDefinition::caution(abnormal(21, 41), ProcedureRule::TrimAirHiPr).items(&[
        // HOT AIR OFF
        ChecklistItem::unsensed(0),
    ]),
    ProcedureDefinition::caution(PACK_1_2_FAULT, ProcedureRule::Pack12Fault)
        .items(&[
            // PACK 1 OFF
            ChecklistItem::sensed(0),
            // PACK 2 OFF
            ChecklistItem::sensed(0),
            // DESCENT TO FL 100
            ChecklistItem::unsensed(0),
        ])
        .inop(&[inop(21, 6), inop(21, 7)]),
    ProcedureDefinition::caution(abnormal(21, 1), ProcedureRule::PackFault(1))
        .overridden_by(&[PACK_1_2_FAULT])
        .items(PACK_OFF_ITEMS)
        .inop(&[inop(21, 6)]),
    ProcedureDefinition::caution(abnormal(21, 2), ProcedureRule::PackFault(2))
        .overridden_by(&[PACK_1_2_FAULT])
        .items(PACK_OFF_ITEMS)
        .inop(&[inop(21, 7)]),
    ProcedureDefinition::caution(abnormal(21, 4), ProcedureRule::PackOff(1))
        .overridden_by(&[PACK_1_2_FAULT]),
    ProcedureDefinition::caution(abnormal(21, 5), ProcedureRule::PackOff(2))
        .overridden_by(&[PACK_1_2_FAULT]),
    // 21 CABIN PRESSURE
    ProcedureDefinition::caution(CPC_1_2_FAULT, ProcedureRule::Cpc12Fault)
        .items(&[
            // MAN PRESS MODE SEL MAN
            ChecklistItem::unsensed(0),
        ])
        .inop(&[inop(21, 3), inop(21, 4), inop(21, 5)]),
    ProcedureDefinition::caution(abnormal(21, 50), ProcedureRule::Cpc1Fault)
        .overridden_by(&[CPC_1_2_FAULT])
        .inop(&[inop(21, 3)]),
    ProcedureDefinition::caution(abnormal(21, 51), ProcedureRule::Cpc2Fault)
        .overridden_by(&[CPC_1_2_FAULT])
        .inop(&[inop(21, 4)]),
    ProcedureDefinition::caution(abnormal(21, 53), ProcedureRule::ExcessResidualPr).items(&[
        // PACK 1 OFF
        ChecklistItem::sensed(0),
        // PACK 2 OFF
        ChecklistItem::sensed(0),
    ]),
    ProcedureDefinition::caution(abnormal(21, 54), ProcedureRule::OutflowValveNotOpen).items(&[
        // OUTFLOW VALVE OPEN MAN
        ChecklistItem::unsensed(0),
    ]),
    ProcedureDefinition::caution(abnormal(21, 55), ProcedureRule::SafetyValveOpen),
    // 30 ICE
    ProcedureDefinition::caution(abnormal(30, 1), ProcedureRule::IceDetected)
        .inhibited(ICE_INHIBITED)
        .items(&[
            // ENG 1 A-ICE ON
            ChecklistItem::sensed(0),
            // ENG 2 A-ICE ON
            ChecklistItem::sensed(0),
        ])
        .limitations(&[limitation(30, 1)]),
    // 32 LGCIU
    ProcedureDefinition::caution(LGCIU_1_2_FAULT, ProcedureRule::Lgciu12Fault)
        .items(ONE_ACTION)
        .info(&[info(32, 1)])
        .inop(&[inop(32, 1), inop(32, 2)])
        .limitations_appr_ldg(&[limitation(32, 1)]),
    ProcedureDefinition::caution(abnormal(32, 5), ProcedureRule::Lgciu1Fault)
        .overridden_by(&[LGCIU_1_2_FAULT])
        .inop(&[inop(32, 1)]),
    ProcedureDefinition::caution(abnormal(32, 6), ProcedureRule::Lgciu2Fault)
        .overridden_by(&[LGCIU_1_2_FAULT])
        .inop(&[inop(32, 2)]),
];
