use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stab_qsim::{CliffordGateable, QuantumSimulator, StdTableauSim};

fn sim(n: usize) -> StdTableauSim {
    StdTableauSim::with_rng(n, ChaCha8Rng::seed_from_u64(42))
}

#[test]
fn x_equals_h_z_h() {
    let mut direct = sim(1);
    direct.x(0);

    let mut composed = sim(1);
    composed.h(0).z(0).h(0);

    assert_eq!(direct.tableau(), composed.tableau());
}

#[test]
fn y_equals_x_then_z_up_to_phase_bookkeeping() {
    // Y = i*X*Z as operators; applied to |0> both conjugate the stabilizer generators the same
    // way, so the resulting tableaus (which only track the ±1 phase, not the global i) match.
    let mut direct = sim(1);
    direct.y(0);

    let mut composed = sim(1);
    composed.z(0).x(0);

    assert_eq!(direct.tableau(), composed.tableau());
}

#[test]
fn swap_is_self_inverse() {
    let mut t = sim(2);
    t.h(0).sz(1).cx(0, 1);
    let before = t.tableau().clone();

    t.swap(0, 1).swap(0, 1);

    assert_eq!(*t.tableau(), before);
}

#[test]
fn cz_is_symmetric_in_its_operands() {
    let mut first = sim(2);
    first.h(0).h(1);
    first.cz(0, 1);

    let mut second = sim(2);
    second.h(0).h(1);
    second.cz(1, 0);

    assert_eq!(first.tableau(), second.tableau());
}

#[test]
fn mz_after_px_is_deterministic_false() {
    let mut t = sim(1);
    t.h(0); // scramble first so px isn't a no-op
    t.px(0);
    let result = t.mz(0) == t.mz(0); // mz is idempotent once collapsed
    assert!(result);
}

#[test]
fn reset_undoes_prior_gates() {
    let mut t = sim(1);
    t.h(0).sz(0);
    t.reset();
    let result = t.mz(0);
    assert!(!result.outcome);
    assert!(result.is_deterministic);
}
