//! Reference immersion coolants.
//!
//! Properties are datasheet values at 40 °C for the candidate fluids under
//! evaluation. Each constructor returns a fresh owned record; the catalog
//! is a convenience, not shared state.

use super::Coolant;

/// DCF-281 synthetic dielectric fluid (Novvi).
#[must_use]
pub fn dcf_281() -> Coolant {
    Coolant::from_datasheet(
        "dcf281",
        "DCF-281 (Novvi)",
        793.36,
        10.41,
        2110.0,
        0.14059,
        123.9,
        "#3b82f6",
    )
}

/// Shell XHVI3 gas-to-liquid base oil.
#[must_use]
pub fn shell_xhvi3() -> Coolant {
    Coolant::from_datasheet(
        "shell_xhvi3",
        "Shell XHVI3 (GTL 3)",
        790.2,
        9.99,
        2070.0,
        0.13702,
        119.2,
        "#22c55e",
    )
}

/// Castrol DC15 data center immersion fluid.
#[must_use]
pub fn castrol_dc15() -> Coolant {
    Coolant::from_datasheet(
        "castrol_dc15",
        "Castrol DC15",
        819.0,
        7.50,
        2200.0,
        0.134,
        100.8,
        "#ef4444",
    )
}

/// Valvoline HPC DE1 immersion fluid.
#[must_use]
pub fn valvoline_hpc_de1() -> Coolant {
    Coolant::from_datasheet(
        "valvoline_hpc",
        "Valvoline HPC DE1",
        811.5,
        8.01,
        2000.0,
        0.1304,
        99.7,
        "#f59e0b",
    )
}

/// Fuchs Renolin FECC 5 immersion fluid.
#[must_use]
pub fn fuchs_renolin_fecc5() -> Coolant {
    Coolant::from_datasheet(
        "fuchs_renolin",
        "Fuchs Renolin FECC 5",
        826.0,
        4.96,
        2200.0,
        0.134,
        67.2,
        "#ec4899",
    )
}

/// Experimental metallocene PAO dimer.
#[must_use]
pub fn novel_mpao_dimer() -> Coolant {
    Coolant::from_datasheet(
        "novel_mpao",
        "Novel MPAO Dimer",
        794.8,
        7.994,
        2270.0,
        0.15203,
        94.7,
        "#a855f7",
    )
}

/// All reference coolants, in display order.
#[must_use]
pub fn all() -> Vec<Coolant> {
    vec![
        dcf_281(),
        shell_xhvi3(),
        castrol_dc15(),
        valvoline_hpc_de1(),
        fuchs_renolin_fecc5(),
        novel_mpao_dimer(),
    ]
}
