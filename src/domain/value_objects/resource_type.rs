//! CloudFormation resource type tag.

use std::fmt;

/// Resource type tag as reported by CloudFormation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// `AWS::Lambda::Function`
    LambdaFunction,
    /// Any other type, kept verbatim
    Other(String),
}

impl ResourceType {
    pub const LAMBDA_FUNCTION: &'static str = "AWS::Lambda::Function";

    /// Classify a raw type tag. Matching is exact, as CloudFormation tags are.
    pub fn from_tag(tag: &str) -> Self {
        if tag == Self::LAMBDA_FUNCTION {
            Self::LambdaFunction
        } else {
            Self::Other(tag.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::LambdaFunction => Self::LAMBDA_FUNCTION,
            Self::Other(tag) => tag,
        }
    }

    /// Whether this is a compute-function resource
    pub fn is_function(&self) -> bool {
        matches!(self, Self::LambdaFunction)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ResourceType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lambda_tag_is_function() {
        let ty = ResourceType::from_tag("AWS::Lambda::Function");
        assert_eq!(ty, ResourceType::LambdaFunction);
        assert!(ty.is_function());
    }

    #[test]
    fn similar_tags_are_not_functions() {
        for tag in [
            "AWS::Lambda::Permission",
            "AWS::Lambda::Version",
            "AWS::Serverless::Function",
            "aws::lambda::function",
            "AWS::S3::Bucket",
        ] {
            let ty = ResourceType::from_tag(tag);
            assert!(!ty.is_function(), "{tag} should not be a function");
            assert_eq!(ty.as_str(), tag);
        }
    }
}
