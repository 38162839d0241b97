mod tests_errors;
mod tests_grammar;
mod tests_round_trip;
