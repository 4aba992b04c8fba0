/// Counts for various things which count, roughly.
#[derive(Default)]
pub struct Counters {
    /// A count of calls to solve.
    pub solves: u64,

    /// A count of every conflict seen.
    pub total_conflicts: u64,

    /// A count of conflicts seen since the last restart.
    ///
    /// As u32 rather than a u64 for easier interaction with scheduling variables.
    pub fresh_conflicts: u32,

    /// A count of all decisions made.
    pub total_decisions: u64,

    /// A count of decisions whose atom was chosen at random.
    pub random_decisions: u64,

    /// A count of every propagation made.
    pub propagations: u64,

    /// A count of literals in clauses learnt, after minimisation.
    pub learnt_literals: u64,

    /// The number of restarts made.
    pub restarts: u64,

    /// The number of learnt clause reductions made.
    pub reductions: u64,

    /// The number of times the clause arena has been compacted.
    pub garbage_collections: u64,
}
