use stab_qsim::Tableau;

#[test]
fn scenario_1_z_on_zero_is_deterministic_zero() {
    let mut t = Tableau::new(1).unwrap();
    assert_eq!(t.measure(0, false, false).code(), 0);
}

#[test]
fn scenario_2_hadamard_then_measure_is_random() {
    let mut t = Tableau::new(1).unwrap();
    t.hadamard(0);
    assert_eq!(t.measure(0, false, true).code(), 3);
    assert_eq!(t.measure(0, false, false).code(), 1);
}

#[test]
fn scenario_3_bell_pair_measurement_correlates() {
    let mut t = Tableau::new(2).unwrap();
    t.hadamard(0);
    t.cnot(0, 1);
    assert_eq!(t.measure(0, false, true).code(), 3);
    assert_eq!(t.measure(1, false, false).code(), 1);
}

#[test]
fn scenario_4_phase_squared_equals_z_preserves_zero() {
    let mut t = Tableau::new(1).unwrap();
    t.phase(0);
    t.phase(0);
    assert_eq!(t.measure(0, false, false).code(), 0);
}

#[test]
fn scenario_5_three_qubit_ghz_measure_all() {
    let mut t = Tableau::new(3).unwrap();
    t.hadamard(0);
    t.cnot(0, 1);
    t.cnot(1, 2);
    assert_eq!(t.measure(0, false, false).code(), 2);
    assert_eq!(t.measure(1, false, false).code(), 0);
    assert_eq!(t.measure(2, false, false).code(), 0);

    let mut t2 = Tableau::new(3).unwrap();
    t2.hadamard(0);
    t2.cnot(0, 1);
    t2.cnot(1, 2);
    assert_eq!(t2.measure(0, false, true).code(), 3);
    assert_eq!(t2.measure(1, false, false).code(), 1);
    assert_eq!(t2.measure(2, false, false).code(), 1);
}

#[test]
fn scenario_6_hadamard_is_self_inverse_on_every_qubit() {
    let initial = Tableau::new(4).unwrap();
    let mut t = Tableau::new(4).unwrap();
    for b in 0..4 {
        t.hadamard(b);
        t.hadamard(b);
    }
    assert_eq!(t, initial);
}
