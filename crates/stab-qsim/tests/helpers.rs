use stab_qsim::Tableau;

/// Symplectic inner product of two rows over GF(2): `sum_j x1[j]*z2[j] + x2[j]*z1[j] mod 2`.
/// Zero iff the two rows' Pauli operators commute.
#[allow(dead_code)]
pub fn symplectic_inner_product(t: &Tableau, row1: usize, row2: usize) -> u8 {
    let n = t.num_qubits();
    let mut acc = 0u8;
    for j in 0..n {
        let term = u8::from(t.peek_x(row1, j) && t.peek_z(row2, j))
            ^ u8::from(t.peek_x(row2, j) && t.peek_z(row1, j));
        acc ^= term;
    }
    acc
}

#[allow(dead_code)]
pub fn rows_commute(t: &Tableau, row1: usize, row2: usize) -> bool {
    symplectic_inner_product(t, row1, row2) == 0
}
