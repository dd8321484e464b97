#[cfg(test)]
pub const POST_DATA: &str = "---
author: Jane Doe
title: My First Post!
description: A test.
tags: rust, writing
---

Opening paragraph of the post.

A second paragraph with *emphasis*.
";

#[cfg(test)]
pub const AUTHORS_DATA: &str = r#"
[[authors]]
slug = "evan"
name = "Evan Dorn"

[[authors]]
slug = "paula"
name = "Paula Ribas"
"#;
