//! PHPUnit test class rendering
//!
//! Renders the fixed test-class template for a parsed signature: a stub
//! method returning a constant, a driver method, and one test method per
//! boundary case. The six cases live in [`BOUNDARY_CASES`] and drive a
//! single rendering loop. Output is deterministic; rendering the same
//! signature twice yields byte-identical text.

use crate::signature::Signature;
use testforge_utils::string::capitalize_first;

/// One fixed boundary-value test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryCase {
    /// Suffix of the generated test method name, e.g. `MaxInt`
    pub label: &'static str,
    /// Heading used in the comment banner above the test method
    pub heading: &'static str,
    /// PHP literal substituted into the input array
    pub literal: &'static str,
}

/// The six boundary cases every generated suite contains, in render order
pub const BOUNDARY_CASES: [BoundaryCase; 6] = [
    BoundaryCase { label: "MaxInt", heading: "MAX_INT", literal: "32767" },
    BoundaryCase { label: "MinInt", heading: "MIN_INT", literal: "-32768" },
    BoundaryCase { label: "NullValue", heading: "NULL Value", literal: "NULL" },
    BoundaryCase { label: "Zero", heading: "Zero", literal: "0" },
    BoundaryCase { label: "NegativeValue", heading: "Negative Value", literal: "-1" },
    BoundaryCase { label: "StringValue", heading: "Empty String value", literal: "\"\"" },
];

const BANNER: &str =
    "///////////////////////////////////////////////////////////////////////////";

/// A rendered test suite ready to be written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSuite {
    /// Generated class name, `<CapitalizedFunctionName>Test`
    pub class_name: String,
    /// Full text of the generated PHP file
    pub contents: String,
}

impl RenderedSuite {
    /// File name the suite is written under
    pub fn file_name(&self) -> String {
        format!("{}.php", self.class_name)
    }
}

/// Render the test class for a signature
///
/// Returns `None` for a zero-argument function; suites are only generated
/// for functions that take parameters.
///
/// Two quirks of the reproduced tool are kept on purpose: the padding
/// positions between the first and last input value are always the literal
/// `0`, never the boundary value of the case being rendered, and the stub
/// always returns `"abc"` so every generated assertion compares the stub's
/// constant against itself until the developer fills in real values.
pub fn render_test_class(sig: &Signature) -> Option<RenderedSuite> {
    if !sig.has_params() {
        return None;
    }

    let uc_function = capitalize_first(&sig.name);
    let class_name = format!("{}Test", uc_function);
    let args = sig.params.join(", ");

    // Stubs are substituted arguments; mocks reference them by array index
    let mut stubs = String::new();
    let mut mocks = String::new();
    for i in 0..sig.params.len() - 1 {
        stubs.push_str("0, ");
        mocks.push_str(&format!(", $expectResults[{}]", i + 1));
    }

    let mut out = format!(
        r#"<?php

class {class_name} extends PHPUnit_Framework_TestCase
{{
    // Function under testing
    private function {function}({args})
    {{
        return "abc";
    }}

    // Test Driver function, don't call {function}() directly
    // Usage: $actual_result = run_{function}(array({args}, $expected_result));
    private function run_{function}(Array $expectResults)
    {{
        $actualResult = $this->{function}($expectResults[0]{mocks});

        return array($actualResult, end($expectResults));
    }}

    // Use Cases
    {banner}

    // Heuristic Cases
    {banner}
"#,
        class_name = class_name,
        function = sig.name,
        args = args,
        mocks = mocks,
        banner = BANNER,
    );

    for case in &BOUNDARY_CASES {
        out.push_str(&format!(
            r#"
    // Boundary Case: {heading}
    {banner}
    public function test{uc_function}_{label}()
    {{
        // Act
        $results = $this->run_{function}(array({literal}, {stubs}{literal}));

        // Assert
        $this->assertEquals($results[0], $results[1]);
    }}
"#,
            heading = case.heading,
            banner = BANNER,
            uc_function = uc_function,
            label = case.label,
            function = sig.name,
            literal = case.literal,
            stubs = stubs,
        ));
    }

    out.push_str("};\n");

    Some(RenderedSuite {
        class_name,
        contents: out,
    })
}
