mod tests_edits;
mod tests_selection;
