use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported programming languages, identified by their short codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "js")]
    JavaScript,
    #[serde(rename = "py")]
    Python,
    #[serde(rename = "cpp")]
    Cpp,
    #[serde(rename = "c")]
    C,
    #[serde(rename = "java")]
    Java,
    #[serde(rename = "go")]
    Go,
    #[serde(rename = "cs")]
    CSharp,
}

impl Language {
    /// Every supported language, in selector order.
    pub const ALL: [Language; 7] = [
        Language::JavaScript,
        Language::Python,
        Language::Cpp,
        Language::C,
        Language::Java,
        Language::Go,
        Language::CSharp,
    ];

    /// Short code used to identify the language on the caller side.
    pub fn code(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::Python => "py",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::Java => "java",
            Language::Go => "go",
            Language::CSharp => "cs",
        }
    }

    /// Runtime name the execution service expects in the request body.
    pub fn runtime_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Cpp => "c++",
            Language::C => "c",
            Language::Java => "java",
            Language::Go => "go",
            Language::CSharp => "csharp",
        }
    }

    /// Starter snippet for an empty editor pane.
    pub fn starter_source(&self) -> &'static str {
        match self {
            Language::JavaScript => {
                "function example() {\n  const data = [1, 2, 3];\n  return data.map(item => item * 2);\n}\n\nconsole.log(example());"
            }
            Language::Python => "print('Hello from Python!')",
            Language::Cpp => {
                "#include <iostream>\n\nint main() {\n    std::cout << \"Hello from C++!\";\n    return 0;\n}"
            }
            Language::C => {
                "#include <stdio.h>\n\nint main() {\n    printf(\"Hello from C!\");\n    return 0;\n}"
            }
            Language::Java => {
                "public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello from Java!\");\n    }\n}"
            }
            Language::Go => {
                "package main\nimport \"fmt\"\n\nfunc main() {\n    fmt.Println(\"Hello from Go!\")\n}"
            }
            Language::CSharp => {
                "using System;\n\nclass Program {\n    static void Main() {\n        Console.WriteLine(\"Hello from C#!\");\n    }\n}"
            }
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "js" => Ok(Language::JavaScript),
            "py" => Ok(Language::Python),
            "cpp" => Ok(Language::Cpp),
            "c" => Ok(Language::C),
            "java" => Ok(Language::Java),
            "go" => Ok(Language::Go),
            "cs" => Ok(Language::CSharp),
            _ => Err(Error::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.runtime_name())
    }
}
