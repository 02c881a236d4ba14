mod tests_end_to_end;
mod tests_errors;
mod tests_round_trip;
