//! Data type signatures.
//!
//! A column type is stored as free text and interpreted on demand:
//!
//! ```text
//! NAME[(p1, p2, ...)][ POSTFIX]
//! ```
//!
//! e.g. `VARCHAR(255)`, `DECIMAL(10, 2)`, `TIMESTAMP(3) WITH TIME ZONE`.
//! Parsing never fails; text with unmatched parentheses is kept whole as
//! the type name.

use std::fmt;

/// A parsed type signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataType {
    name: String,
    params: Option<Vec<String>>,
    postfix: Option<String>,
}

impl DataType {
    /// A bare type name with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
            postfix: None,
        }
    }

    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = non_empty(params.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        let postfix = postfix.into();
        self.postfix = if postfix.trim().is_empty() {
            None
        } else {
            Some(postfix.trim().to_string())
        };
        self
    }

    /// Parse a type signature.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();

        let (Some(lparen), Some(rparen)) = (s.find('('), s.find(')')) else {
            return Self::new(s);
        };
        if rparen < lparen {
            return Self::new(s);
        }

        let name = s[..lparen].trim().to_string();
        let params = s[lparen + 1..rparen]
            .split(',')
            .map(|p| p.trim().to_string())
            .collect();
        let postfix = s[rparen + 1..].trim();

        Self {
            name,
            params: Some(params),
            postfix: (!postfix.is_empty()).then(|| postfix.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name followed by the postfix, without parameters.
    ///
    /// `TIMESTAMP(3) WITH TIME ZONE` has the full name `TIMESTAMP WITH TIME ZONE`.
    pub fn full_name(&self) -> String {
        match &self.postfix {
            Some(postfix) => format!("{} {}", self.name, postfix),
            None => self.name.clone(),
        }
    }

    pub fn params(&self) -> Option<&[String]> {
        self.params.as_deref()
    }

    pub fn postfix(&self) -> Option<&str> {
        self.postfix.as_deref()
    }

    /// Whether the signature is a template still carrying placeholder parameters.
    pub fn is_parameterized(&self) -> bool {
        self.params.is_some()
    }

    /// Instantiate with concrete parameters, keeping name and postfix.
    ///
    /// An empty argument list removes the parameters entirely.
    pub fn replace_params<I, S>(&self, args: I) -> DataType
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DataType {
            name: self.name.clone(),
            params: non_empty(args.into_iter().map(Into::into).collect()),
            postfix: self.postfix.clone(),
        }
    }
}

fn non_empty(params: Vec<String>) -> Option<Vec<String>> {
    if params.is_empty() {
        None
    } else {
        Some(params)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(params) = &self.params {
            write!(f, "({})", params.join(", "))?;
        }
        if let Some(postfix) = &self.postfix {
            write!(f, " {}", postfix)?;
        }
        Ok(())
    }
}

impl From<&str> for DataType {
    fn from(s: &str) -> Self {
        DataType::parse(s)
    }
}
