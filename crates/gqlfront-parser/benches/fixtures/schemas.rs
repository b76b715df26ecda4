use std::fmt::Write;

/// Generates a schema with `type_count` object types, each with a
/// description, an interface and `fields_per_type` fields taking
/// arguments.
pub fn synthetic_schema(type_count: usize, fields_per_type: usize) -> String {
    let mut out = String::with_capacity(type_count * fields_per_type * 60);
    out.push_str("interface Node {\n  id: ID!\n}\n\n");
    out.push_str("enum Order {\n  ASC\n  DESC\n}\n\n");
    for t in 0..type_count {
        writeln!(out, "\"\"\"\nGenerated type number {t}.\n\"\"\"").unwrap();
        writeln!(out, "type Type{t} implements Node @key(fields: \"id\") {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        for f in 0..fields_per_type {
            let target = (t + f + 1) % type_count;
            writeln!(
                out,
                "  \"Field {f}\"\n  field{f}(first: Int = 10, order: Order = ASC): [Type{target}!]",
            )
            .unwrap();
        }
        out.push_str("}\n\n");
    }
    out
}
