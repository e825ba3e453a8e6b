//! List command output

use anyhow::Result;
use caseswitch_core::{Locale, LocaleTag, Mode};
use std::io::Write;

/// Write one line per mode: shortcut, identifier, localized label and
/// description
pub fn write_modes<W: Write>(writer: &mut W, locale: &LocaleTag) -> Result<()> {
    writeln!(writer, "Available modes ({}):", locale.locale())?;
    for mode in Mode::ALL {
        writeln!(
            writer,
            "  Alt+Shift+{}  {:<14} {:<21} {}",
            mode.default_shortcut(),
            mode.id(),
            mode.label(locale.locale()),
            mode.description()
        )?;
    }
    Ok(())
}

/// Write one line per bundled locale
pub fn write_locales<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "Available locales:")?;
    for locale in Locale::ALL {
        writeln!(writer, "  {:<4} {}", locale.code(), locale.name())?;
    }
    writeln!(
        writer,
        "Other tags use English word lists; tr and az also get Turkic casing."
    )?;
    Ok(())
}
