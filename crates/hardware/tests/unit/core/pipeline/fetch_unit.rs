//! Fetch Unit Selection Tests.

use rstest::rstest;
use rvfetch_core::common::{ConfigError, Xlen};
use rvfetch_core::config::{Config, FetchVariant};
use rvfetch_core::core::pipeline::frontend::{FetchFrontend, FetchUnit};
use rvfetch_core::core::pipeline::latches::FetchedInstruction;

use crate::common::harness::{START_PC, config};
use crate::common::mocks::icache::MockICache;

#[rstest]
#[case(FetchVariant::Basic)]
#[case(FetchVariant::Unaligned)]
fn builds_the_selected_variant(#[case] variant: FetchVariant) {
    let unit = FetchUnit::from_config(&config(variant, START_PC)).unwrap();
    assert_eq!(unit.variant(), variant);
    assert_eq!(unit.last_pc(), 0, "nothing delivered yet");
    assert_eq!(unit.outstanding(), 0);
    assert!(!unit.is_stalled());
    assert!(!unit.can_resume());
    assert_eq!(unit.stats().cycles, 0);
}

#[test]
fn default_config_selects_unaligned() {
    let unit = FetchUnit::from_config(&Config::default()).unwrap();
    assert!(matches!(unit, FetchUnit::Unaligned(_)));
}

#[test]
fn basic_rejects_half_aligned_start() {
    let err = FetchUnit::from_config(&config(FetchVariant::Basic, START_PC + 2)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MisalignedStartPc {
            pc: 0x8000_0002,
            alignment: 4,
        }
    ));
}

#[test]
fn unaligned_accepts_half_aligned_start() {
    let unit = FetchUnit::from_config(&config(FetchVariant::Unaligned, START_PC + 2)).unwrap();
    match unit {
        FetchUnit::Unaligned(fetch) => assert_eq!(fetch.current_pc(), START_PC + 2),
        FetchUnit::Basic(_) => panic!("expected the unaligned fetcher"),
    }
}

#[test]
fn rv32_rejects_wide_start_pc() {
    let mut cfg = config(FetchVariant::Unaligned, 0x1_0000_0000);
    cfg.general.xlen = Xlen::Rv32;
    assert!(matches!(
        FetchUnit::from_config(&cfg),
        Err(ConfigError::StartPcOutOfRange { bits: 32, .. })
    ));
}

#[test]
fn ticks_through_the_wrapped_controller() {
    let mut unit = FetchUnit::from_config(&config(FetchVariant::Basic, START_PC)).unwrap();
    let mut icache = MockICache::new(1);
    let mut sink: Vec<FetchedInstruction> = Vec::new();

    unit.tick(&mut icache, &mut sink);
    assert_eq!(unit.outstanding(), 1);
    assert_eq!(icache.requests(), &[START_PC]);
    assert_eq!(unit.stats().cycles, 1);
}
