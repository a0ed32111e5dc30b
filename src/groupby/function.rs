//! User function protocol for modify and aggregate

use std::fmt;
use std::sync::Arc;

use crate::column::Column;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::value::Value;

/// Result of one function invocation
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionOutput {
    /// A single value, as required by aggregate
    Scalar(Value),
    /// One value per input row, as required by modify
    Sequence(Vec<Value>),
}

impl FunctionOutput {
    pub fn scalar(value: impl Into<Value>) -> Self {
        FunctionOutput::Scalar(value.into())
    }

    pub fn sequence<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        FunctionOutput::Sequence(values.into_iter().map(Into::into).collect())
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, FunctionOutput::Sequence(_))
    }
}

/// A function applied to the input columns of one group at a time
///
/// `call` receives one column slice per requested input column, in the
/// order the columns were requested. Implementations must not rely on the
/// order in which groups are visited; groups may be processed concurrently.
pub trait GroupFunction: Send + Sync {
    /// Name used in logs and error messages
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Number of input columns the function accepts, if fixed
    fn arity(&self) -> Option<usize> {
        None
    }

    fn call(&self, columns: &[&Column]) -> Result<FunctionOutput>;
}

impl<T: GroupFunction + ?Sized> GroupFunction for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn arity(&self) -> Option<usize> {
        (**self).arity()
    }

    fn call(&self, columns: &[&Column]) -> Result<FunctionOutput> {
        (**self).call(columns)
    }
}

impl<T: GroupFunction + ?Sized> GroupFunction for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn arity(&self) -> Option<usize> {
        (**self).arity()
    }

    fn call(&self, columns: &[&Column]) -> Result<FunctionOutput> {
        (**self).call(columns)
    }
}

impl<T: GroupFunction + ?Sized> GroupFunction for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn arity(&self) -> Option<usize> {
        (**self).arity()
    }

    fn call(&self, columns: &[&Column]) -> Result<FunctionOutput> {
        (**self).call(columns)
    }
}

/// A closure wrapped as a `GroupFunction`
pub struct FnFunction<F> {
    name: String,
    arity: Option<usize>,
    f: F,
}

impl<F> FnFunction<F>
where
    F: Fn(&[&Column]) -> Result<FunctionOutput> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            arity: None,
            f,
        }
    }

    /// Declare how many input columns the closure expects
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = Some(arity);
        self
    }
}

impl<F> fmt::Debug for FnFunction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

impl<F> GroupFunction for FnFunction<F>
where
    F: Fn(&[&Column]) -> Result<FunctionOutput> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> Option<usize> {
        self.arity
    }

    fn call(&self, columns: &[&Column]) -> Result<FunctionOutput> {
        (self.f)(columns)
    }
}

/// Wrap a closure as a named `GroupFunction`
pub fn from_fn<F>(name: impl Into<String>, f: F) -> FnFunction<F>
where
    F: Fn(&[&Column]) -> Result<FunctionOutput> + Send + Sync,
{
    FnFunction::new(name, f)
}

/// Preconditions shared by every modify/aggregate entry point
///
/// Checked before any function call so that a bad call never runs the
/// function on part of the data.
pub(crate) fn check_arguments<F, S>(
    frame: &DataFrame,
    function: &F,
    new_column: &str,
    input_columns: &[S],
) -> Result<()>
where
    F: GroupFunction + ?Sized,
    S: AsRef<str>,
{
    if new_column.is_empty() {
        return Err(Error::InvalidArgument(
            "new column name must not be empty".to_string(),
        ));
    }
    if input_columns.is_empty() {
        return Err(Error::InvalidArgument(
            "at least one input column is required".to_string(),
        ));
    }
    if let Some(arity) = function.arity() {
        if arity != input_columns.len() {
            return Err(Error::InvalidArgument(format!(
                "function '{}' takes {} input column(s), {} given",
                function.name(),
                arity,
                input_columns.len()
            )));
        }
    }
    for name in input_columns {
        frame.column_position(name.as_ref())?;
    }
    Ok(())
}
