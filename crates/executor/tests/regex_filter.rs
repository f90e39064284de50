// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

//! End-to-end scenario: a row-filtering executor that keeps the rows whose
//! text column matches a regular expression supplied via params.

use langext_dataset::{Dataset, PrimitiveDataset};
use langext_executor::{Executor, ExecutorError, Params, Result, Session};
use langext_type::Type;
use regex::Regex;

const PARAM_REGEX_EXPR: &str = "regexExpr";

/// Expects an input schema of at least `(0: INTEGER, 1: VARCHAR|NVARCHAR)`
/// and emits the matching rows as `(0 "ID": INTEGER, 1 "Text": NVARCHAR)`.
struct RegexFilter;

impl RegexFilter {
	fn validate_input(&self, input: &dyn Dataset) -> Result<()> {
		let expected = "(INTEGER, VARCHAR or NVARCHAR)".to_string();

		let count = input.column_count()?;
		if count < 2 {
			return Err(ExecutorError::SchemaMismatch {
				expected,
				actual: format!("{count} columns"),
			});
		}

		let id_type = input.column_type(0)?;
		let text_type = input.column_type(1)?;
		if id_type != Type::Integer || !matches!(text_type, Type::Varchar | Type::Nvarchar) {
			return Err(ExecutorError::SchemaMismatch {
				expected,
				actual: format!("({id_type}, {text_type})"),
			});
		}

		Ok(())
	}
}

impl Executor for RegexFilter {
	fn execute(&mut self, input: &dyn Dataset, params: &Params) -> Result<Box<dyn Dataset>> {
		let pattern = params.require_str(PARAM_REGEX_EXPR)?;
		self.validate_input(input)?;

		let expr = Regex::new(pattern).expect("test patterns are valid");

		let ids = input.integer_column(0)?;
		let texts = input.string_column(1)?;

		let mut out_ids = Vec::new();
		let mut out_texts = Vec::new();
		for (id, text) in ids.iter().zip(texts) {
			if let Some(text) = text {
				if expr.find(text).is_some() {
					out_ids.push(*id);
					out_texts.push(Some(text.clone()));
				}
			}
		}

		let mut output = PrimitiveDataset::new();
		output.add_column_metadata(0, "ID", Type::Integer, 0, 0)?;
		output.add_column_metadata(1, "Text", Type::Nvarchar, 0, 0)?;
		output.add_integer_column(0, out_ids, None)?;
		output.add_string_column(1, out_texts)?;

		Ok(Box::new(output))
	}
}

fn sample_input() -> PrimitiveDataset {
	let mut input = PrimitiveDataset::new();
	input.add_column_metadata(0, "id", Type::Integer, 0, 0).unwrap();
	input.add_column_metadata(1, "text", Type::Varchar, 0, 0).unwrap();
	input.add_integer_column(0, vec![1, 2], None).unwrap();
	input.add_string_column(1, vec![Some("I love java".to_string()), Some("Not found".to_string())])
		.unwrap();
	input
}

#[test]
fn test_matching_rows_are_kept() {
	let mut session = Session::new(RegexFilter);
	session.init("session-1", 0, 1).unwrap();

	let params: Params = [(PARAM_REGEX_EXPR, "[Jj]ava")].into_iter().collect();
	let output = session.execute(&sample_input(), &params).unwrap();

	assert_eq!(output.column_count().unwrap(), 2);
	assert_eq!(output.column_name(0).unwrap(), "ID");
	assert_eq!(output.column_type(1).unwrap(), Type::Nvarchar);
	assert_eq!(output.integer_column(0).unwrap(), &[1]);
	assert_eq!(output.string_column(1).unwrap(), &[Some("I love java".to_string())]);

	session.cleanup().unwrap();
}

#[test]
fn test_no_match_produces_empty_columns() {
	let mut session = Session::new(RegexFilter);
	session.init("session-1", 0, 1).unwrap();

	let params: Params = [(PARAM_REGEX_EXPR, "zzz")].into_iter().collect();
	let output = session.execute(&sample_input(), &params).unwrap();

	assert_eq!(output.column_count().unwrap(), 2);
	assert_eq!(output.integer_column(0).unwrap(), &[] as &[i32]);
	assert!(output.string_column(1).unwrap().is_empty());

	session.cleanup().unwrap();
}

#[test]
fn test_missing_parameter() {
	let mut session = Session::new(RegexFilter);
	session.init("session-1", 0, 1).unwrap();

	assert_eq!(
		session.execute(&sample_input(), &Params::new()).err(),
		Some(ExecutorError::MissingParameter {
			name: PARAM_REGEX_EXPR.to_string()
		})
	);
}

#[test]
fn test_schema_mismatch() {
	let mut input = PrimitiveDataset::new();
	input.add_column_metadata(0, "id", Type::Double, 0, 0).unwrap();
	input.add_column_metadata(1, "text", Type::Varchar, 0, 0).unwrap();

	let mut session = Session::new(RegexFilter);
	session.init("session-1", 0, 1).unwrap();

	let params: Params = [(PARAM_REGEX_EXPR, "java")].into_iter().collect();
	assert_eq!(
		session.execute(&input, &params).err(),
		Some(ExecutorError::SchemaMismatch {
			expected: "(INTEGER, VARCHAR or NVARCHAR)".to_string(),
			actual: "(DOUBLE, VARCHAR)".to_string()
		})
	);
}

#[test]
fn test_too_few_columns() {
	let mut input = PrimitiveDataset::new();
	input.add_column_metadata(0, "id", Type::Integer, 0, 0).unwrap();

	let mut session = Session::new(RegexFilter);
	session.init("session-1", 0, 1).unwrap();

	let params: Params = [(PARAM_REGEX_EXPR, "java")].into_iter().collect();
	assert_eq!(
		session.execute(&input, &params).err(),
		Some(ExecutorError::SchemaMismatch {
			expected: "(INTEGER, VARCHAR or NVARCHAR)".to_string(),
			actual: "1 columns".to_string()
		})
	);
}

#[test]
fn test_same_session_executes_repeatedly() {
	let mut session = Session::new(RegexFilter);
	session.init("session-1", 0, 1).unwrap();

	let input = sample_input();
	let found: Params = [(PARAM_REGEX_EXPR, "found")].into_iter().collect();
	let java: Params = [(PARAM_REGEX_EXPR, "java")].into_iter().collect();

	let output = session.execute(&input, &found).unwrap();
	assert_eq!(output.integer_column(0).unwrap(), &[2]);

	let output = session.execute(&input, &java).unwrap();
	assert_eq!(output.integer_column(0).unwrap(), &[1]);

	session.cleanup().unwrap();
}
