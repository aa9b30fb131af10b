//! Common test helpers for integration tests

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

pub const MODULES: &str = r#"
core:
  title: Core
  entries:
    - name: A
      link: a
      official: true
      desc: d
"#;

pub const COMPANIES: &str = r#"
users:
  - name: Acme
    link: https://acme.test
"#;

pub const TEMPLATE: &str = "\
{% for topic in index %}## {{ topic.name }}
<a name=\"{{ topic.link }}\"></a>
{% if topic.modules is defined %}{% for m in topic.modules %}- [{{ m.name }}]({{ m.link | safe }}){% if m.official is defined %} {{ m.official | safe }}{% endif %}{% if m.desc is defined %}{{ m.desc | safe }}{% endif %}
{% endfor %}{% endif %}{% endfor %}
# Companies
{% for c in companies %}- [{{ c.name }}]({{ c.link | safe }})
{% endfor %}";

/// Write the three input files into `dir` at their default locations.
pub fn write_inputs(dir: &Path) -> std::io::Result<()> {
    fs::write(dir.join("modules.yml"), MODULES)?;
    fs::write(dir.join("companies.yml"), COMPANIES)?;
    fs::create_dir_all(dir.join("templates"))?;
    fs::write(dir.join("templates").join("readme-template.md"), TEMPLATE)?;
    Ok(())
}

/// Run the binary in `dir` with `args`.
pub fn run_in(dir: &Path, args: &[&str]) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_awesome-readme"))
        .args(args)
        .current_dir(dir)
        .output()
}
