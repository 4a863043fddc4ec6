/// Values of a factor's variables, positionally aligned with `Factor::variables`
pub type Assignment = Vec<bool>;

/// Iter all assignments of `n_vars` boolean variables using counter method and apply a function.
///
/// The counter starts at all-true and flips the right-most variable first, so assignments come
/// in the order of a truth table: (T, T), (T, F), (F, T), (F, F). With `n_vars = 0` the function
/// is called once with the empty assignment.
pub fn iter_assignments<F>(n_vars: usize, mut func: F)
    where F: FnMut(usize, &[bool]) -> ()
{
    let mut current_val: Vec<bool> = vec![true; n_vars];
    let mut current_ravelled_index = 0;

    loop {
        func(current_ravelled_index, &current_val);
        current_ravelled_index += 1;

        // move to next state, a true digit becomes false, a false digit overflows to the left
        let mut i = n_vars;
        loop {
            if i == 0 {
                // already iterated through all values
                return;
            }

            i -= 1;
            if current_val[i] {
                current_val[i] = false;
                break;
            }
            current_val[i] = true;
        }
    }
}

/// Pick the values at `positions` (in that order) out of an assignment
pub fn project(assignment: &[bool], positions: &[usize]) -> Assignment {
    positions.iter().map(|&i| assignment[i]).collect()
}
