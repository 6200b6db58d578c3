//! Camera Raw XMP `crs:LookTable` support.
//!
//! Lightroom / Camera Raw profiles can carry a 3D table inside an XMP
//! sidecar. The grid is flattened into one `rdf:Seq` of list items, each
//! holding `r, g, b`.
//!
//! # Flattening
//!
//! Unlike .cube, red varies slowest:
//!
//! ```text
//! idx in 0..size^3
//! r = idx / size^2
//! g = (idx % size^2) / size
//! b = idx % size
//! ```
//!
//! # Document skeleton
//!
//! ```text
//! <?xpacket begin="..." id="W5M0MpCehiHzreSzNTczkc9d"?>
//! <x:xmpmeta ...>
//!   <rdf:RDF ...>
//!     <rdf:Description rdf:about="" xmlns:crs="...">
//!       <crs:LookTable>
//!         <rdf:Seq>
//!           <rdf:li>
//!             <rdf:li>0.000000, 0.000000, 0.000000</rdf:li>
//!             ...
//! ```
//!
//! The skeleton text is fixed; consumers match on it, so it is written
//! literally rather than through an XML serializer.
//!
//! # Byte-order mark
//!
//! `begin` holds the real U+FEFF character, encoded as the UTF-8 bytes
//! `EF BB BF`. Documents produced by the web generator this format mirrors
//! carry the mis-decoded text `ï»¿` (`C3 AF C2 BB C2 BF`) there instead,
//! so output is not byte-identical to theirs on the first line. Every
//! other byte matches.

use crate::fixed::{Fixed, VALUE_DIGITS};
use crate::{Lut3D, LutError, LutResult};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// XMP packet id used in the `xpacket` processing instruction.
pub const XPACKET_ID: &str = "W5M0MpCehiHzreSzNTczkc9d";

/// Toolkit string written into `x:xmptk`.
pub const XMP_TOOLKIT: &str = "Adobe XMP Core 5.6-c140 79.160451, 2017/05/06-01:08:21";

/// Camera Raw settings namespace.
pub const CRS_NAMESPACE: &str = "http://ns.adobe.com/camera-raw-settings/1.0/";

const ITEM_INDENT: &str = "            ";

/// Grid position `(r, g, b)` of flattened item `idx`.
#[inline]
pub fn unflatten(idx: usize, size: usize) -> (usize, usize, usize) {
    let plane = size * size;
    (idx / plane, (idx % plane) / size, idx % size)
}

/// Flattened item index of grid position `(r, g, b)`.
#[inline]
pub fn flatten(r: usize, g: usize, b: usize, size: usize) -> usize {
    r * size * size + g * size + b
}

/// Writes a LookTable XMP file.
pub fn write_look_table<P: AsRef<Path>>(path: P, lut: &Lut3D) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_look_table_to(&mut writer, lut)?;
    writer.flush()?;
    Ok(())
}

/// Encodes a LookTable XMP document as a string.
pub fn to_string_look_table(lut: &Lut3D) -> LutResult<String> {
    let mut buf = Vec::with_capacity(1024 + lut.entry_count() * 50);
    write_look_table_to(&mut buf, lut)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes a LookTable XMP document to any writer.
///
/// Values are written with 6 decimal places; NaN renders as `NaN`. The
/// document has no trailing newline.
pub fn write_look_table_to<W: Write>(writer: &mut W, lut: &Lut3D) -> LutResult<()> {
    writeln!(writer, "<?xpacket begin=\"\u{feff}\" id=\"{}\"?>", XPACKET_ID)?;
    writeln!(
        writer,
        "<x:xmpmeta xmlns:x=\"adobe:ns:meta/\" x:xmptk=\"{}\">",
        XMP_TOOLKIT
    )?;
    writeln!(
        writer,
        "  <rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\">"
    )?;
    writeln!(writer, "    <rdf:Description rdf:about=\"\"")?;
    writeln!(writer, "      xmlns:crs=\"{}\">", CRS_NAMESPACE)?;
    writeln!(writer, "      <crs:LookTable>")?;
    writeln!(writer, "        <rdf:Seq>")?;
    writeln!(writer, "          <rdf:li>")?;
    // The first item inherits the template indent on top of its own
    write!(writer, "{}", ITEM_INDENT)?;

    let size = lut.size;
    for idx in 0..lut.entry_count() {
        if idx > 0 {
            writeln!(writer)?;
        }
        let (r, g, b) = unflatten(idx, size);
        let rgb = lut.get(r, g, b);
        write!(
            writer,
            "{}<rdf:li>{}, {}, {}</rdf:li>",
            ITEM_INDENT,
            Fixed::new(rgb[0], VALUE_DIGITS),
            Fixed::new(rgb[1], VALUE_DIGITS),
            Fixed::new(rgb[2], VALUE_DIGITS)
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "          </rdf:li>")?;
    writeln!(writer, "        </rdf:Seq>")?;
    writeln!(writer, "      </crs:LookTable>")?;
    writeln!(writer, "    </rdf:Description>")?;
    writeln!(writer, "  </rdf:RDF>")?;
    writeln!(writer, "</x:xmpmeta>")?;
    write!(writer, "<?xpacket end=\"w\"?>")?;

    tracing::trace!(size, entries = lut.entry_count(), "wrote LookTable XMP");
    Ok(())
}

/// Reads a LookTable from an XMP file.
pub fn read_look_table<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let file = File::open(path.as_ref())?;
    parse_look_table(BufReader::new(file))
}

/// Parses the `crs:LookTable` grid out of an XMP document.
///
/// Collects every nested `rdf:li` inside `crs:LookTable`, infers the grid
/// size from the item count and reorders into red-fastest storage.
pub fn parse_look_table<R: BufRead>(reader: R) -> LutResult<Lut3D> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut in_table = false;
    let mut li_depth = 0usize;
    let mut items: Vec<[f64; 3]> = Vec::new();

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"crs:LookTable" => in_table = true,
                b"rdf:li" if in_table => li_depth += 1,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"crs:LookTable" => in_table = false,
                b"rdf:li" if in_table => li_depth = li_depth.saturating_sub(1),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_table && li_depth == 2 => {
                let text = String::from_utf8_lossy(&e[..]);
                items.push(parse_item(&text)?);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(LutError::ParseError(format!("XML error: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    if items.is_empty() {
        return Err(LutError::ParseError("no LookTable entries found".into()));
    }

    let size = (items.len() as f64).cbrt().round() as usize;
    if size * size * size != items.len() {
        return Err(LutError::InvalidSize(format!(
            "{} LookTable entries is not a cube",
            items.len()
        )));
    }

    let mut data = vec![[0.0f64; 3]; items.len()];
    for (idx, rgb) in items.into_iter().enumerate() {
        let (r, g, b) = unflatten(idx, size);
        data[r + g * size + b * size * size] = rgb;
    }
    Lut3D::from_data(data, size)
}

fn parse_item(text: &str) -> LutResult<[f64; 3]> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(LutError::ParseError(format!("invalid LookTable item: {}", text)));
    }
    let mut rgb = [0.0f64; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| LutError::ParseError(format!("invalid LookTable value: {}", part)))?;
    }
    Ok(rgb)
}
