use alloy::primitives::Bytes;
use alloy_dyn_abi::{
    DynSolType,
    DynSolValue,
    JsonAbiExt,
};
use alloy_json_abi::{
    Constructor,
    Param,
};

#[derive(thiserror::Error, Debug)]
pub enum EncodeArgsError {
    #[error("expected {expected} constructor arguments, got {actual}")]
    ArgCount { expected: usize, actual: usize },
    #[error("Signature not a constructor: {0}")]
    SignatureNotAConstructor(String),
    #[error("Dynamic ABI Error: {0}")]
    DynAbiError(#[from] alloy_dyn_abi::Error),
    #[error("Error parsing ABI types: {0}")]
    ParseAbiError(#[from] alloy_dyn_abi::parser::Error),
}

type Result<T> = std::result::Result<T, EncodeArgsError>;

fn constructor_inputs(constructor: Option<&Constructor>) -> &[Param] {
    constructor
        .map(|constructor| constructor.inputs.as_slice())
        .unwrap_or_default()
}

/// ABI encodes constructor arguments, without the bytecode in front.
///
/// Values are type checked against the constructor inputs. A missing
/// constructor takes no arguments.
pub fn encode_constructor_args(
    constructor: Option<&Constructor>,
    values: &[DynSolValue],
) -> Result<Bytes> {
    let expected = constructor_inputs(constructor).len();
    if values.len() != expected {
        return Err(EncodeArgsError::ArgCount {
            expected,
            actual: values.len(),
        });
    }

    match constructor {
        Some(constructor) => Ok(constructor.abi_encode_input(values)?.into()),
        None => Ok(Bytes::new()),
    }
}

/// Parses a human readable constructor signature, e.g. `constructor(uint256,string)`.
pub fn parse_constructor(sig: &str) -> Result<Option<Constructor>> {
    let trimmed_sig = sig.trim();
    if trimmed_sig.is_empty() || trimmed_sig == "constructor()" {
        return Ok(None);
    }
    if !trimmed_sig.starts_with("constructor(") {
        return Err(EncodeArgsError::SignatureNotAConstructor(
            "signature must start with 'constructor('".to_string(),
        ));
    }
    Ok(Some(Constructor::parse(trimmed_sig)?))
}

/// Coerces string arguments into ABI values using the constructor input types.
pub fn coerce_constructor_args<S>(
    constructor: Option<&Constructor>,
    args: &[S],
) -> Result<Vec<DynSolValue>>
where
    S: AsRef<str>,
{
    let inputs = constructor_inputs(constructor);
    if inputs.len() != args.len() {
        return Err(EncodeArgsError::ArgCount {
            expected: inputs.len(),
            actual: args.len(),
        });
    }
    coerce_args(inputs, args)
}

pub fn coerce_args<I, S>(inputs: &[Param], args: I) -> Result<Vec<DynSolValue>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    std::iter::zip(inputs, args)
        .map(|(input, arg)| coerce_value(&input.selector_type(), arg.as_ref()))
        .collect()
}

/// Helper function to coerce a value to a [DynSolValue] given a type string
pub fn coerce_value(ty: &str, arg: &str) -> Result<DynSolValue> {
    let ty = DynSolType::parse(ty)?;
    Ok(DynSolType::coerce_str(&ty, arg)?)
}
