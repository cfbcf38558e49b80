/// The named constants available to every script.
///
/// These seed the evaluation context's environment, so a script may shadow
/// them with an ordinary assignment.
pub const NAMED_CONSTANTS: &[(&str, f64)] = &[("PI", std::f64::consts::PI),
                                              ("E", std::f64::consts::E)];
