use crate::error::RenderError;
use lopdf::content::Content;
use lopdf::xref::{Xref, XrefEntry, XrefType};
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Writes a PDF incrementally: page content streams and page objects go to
/// the underlying writer as soon as they are produced, while the document
/// skeleton (resources, page tree, catalog, info) is buffered until `finish`.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    xref: Xref,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    info: Option<Dictionary>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;

        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());

        Ok(Self {
            writer,
            xref: Xref::new(0, XrefType::CrossReferenceTable),
            max_id: 3,
            catalog_id,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            info: None,
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    /// Writes `object` to the output right away.
    pub fn write_object(&mut self, object: Object) -> io::Result<ObjectId> {
        let id = self.new_object_id();
        internal_writer::write_indirect_object(&mut self.writer, id, &object, &mut self.xref)?;
        Ok(id)
    }

    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.write_object(Object::Stream(stream))?)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn push_page_id(&mut self, page_id: ObjectId) {
        self.page_ids.push(page_id);
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn set_info(&mut self, info: Dictionary) {
        self.info = Some(info);
    }

    /// Writes the buffered skeleton, the cross-reference table and the
    /// trailer, and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffered_objects.insert(self.pages_id, pages_dict.into());
        self.buffered_objects.insert(
            self.catalog_id,
            dictionary! { "Type" => "Catalog", "Pages" => self.pages_id }.into(),
        );
        let info_id = self.info.take().map(|info| self.buffer_object(info.into()));

        for (id, object) in &self.buffered_objects {
            internal_writer::write_indirect_object(&mut self.writer, *id, object, &mut self.xref)?;
        }

        let xref_start = self.writer.stream_position()?;
        self.xref.size = self.max_id + 1;
        internal_writer::write_xref(&mut self.writer, &self.xref)?;

        let mut trailer = dictionary! { "Size" => self.xref.size as i64, "Root" => self.catalog_id };
        if let Some(info_id) = info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        internal_writer::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

mod internal_writer {
    use super::*;

    pub fn write_indirect_object<W: Write + Seek>(
        writer: &mut W,
        id: ObjectId,
        object: &Object,
        xref: &mut Xref,
    ) -> io::Result<()> {
        let offset = u32::try_from(writer.stream_position()?)
            .map_err(|_| io::Error::other("PDF output exceeds the 4 GiB cross-reference limit"))?;
        xref.insert(id.0, XrefEntry::Normal { offset, generation: id.1 });
        writeln!(writer, "{} {} obj", id.0, id.1)?;
        write_object(writer, object)?;
        writeln!(writer, "\nendobj")?;
        Ok(())
    }

    /// Serializes the object kinds the report emits: numbers, names, literal
    /// strings, arrays, dictionaries, streams and references.
    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(name) => write_name(writer, name),
            Object::String(bytes, _) => write_literal_string(writer, bytes),
            Object::Array(items) => {
                writer.write_all(b"[")?;
                let mut first = true;
                for item in items {
                    if !first {
                        writer.write_all(b" ")?;
                    }
                    first = false;
                    write_object(writer, item)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference((id, generation)) => write!(writer, "{} {} R", id, generation),
            other => Err(io::Error::other(format!(
                "report documents never contain {:?}",
                other
            ))),
        }
    }

    fn write_name(writer: &mut dyn Write, name: &[u8]) -> io::Result<()> {
        writer.write_all(b"/")?;
        writer.write_all(name)
    }

    /// Text strings are always written literally. Parentheses and backslashes
    /// are escaped, as are line breaks so a content line stays on one line.
    fn write_literal_string(writer: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
        writer.write_all(b"(")?;
        for &byte in bytes {
            match byte {
                b'(' | b')' | b'\\' => writer.write_all(&[b'\\', byte])?,
                b'\n' => writer.write_all(b"\\n")?,
                b'\r' => writer.write_all(b"\\r")?,
                _ => writer.write_all(&[byte])?,
            }
        }
        writer.write_all(b")")
    }

    /// Keys are written in sorted order so identical documents produce
    /// identical bytes.
    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        let mut entries: Vec<_> = dict.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        writer.write_all(b"<<")?;
        for (key, value) in entries {
            write_name(writer, key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }

    /// Object ids are allocated densely from 1, so the table is the free
    /// head entry followed by one contiguous subsection.
    pub fn write_xref<W: Write>(writer: &mut W, xref: &Xref) -> io::Result<()> {
        writeln!(writer, "xref")?;
        writeln!(writer, "0 {}", xref.size)?;
        writeln!(writer, "0000000000 65535 f ")?;
        for id in 1..xref.size {
            match xref.entries.get(&id) {
                Some(XrefEntry::Normal { offset, generation }) => {
                    writeln!(writer, "{:010} {:05} n ", offset, generation)?
                }
                _ => writeln!(writer, "0000000000 65535 f ")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::internal_writer::{write_dictionary, write_object};
    use lopdf::{Object, StringFormat, dictionary};

    fn serialize(object: &Object) -> std::io::Result<Vec<u8>> {
        let mut out = Vec::new();
        write_object(&mut out, object)?;
        Ok(out)
    }

    #[test]
    fn literal_strings_are_escaped() {
        let text = Object::String(b"a(b)\\c\nd".to_vec(), StringFormat::Literal);
        assert_eq!(serialize(&text).unwrap(), b"(a\\(b\\)\\\\c\\nd)".to_vec());
    }

    #[test]
    fn dictionary_keys_are_sorted() {
        let mut out = Vec::new();
        write_dictionary(&mut out, &dictionary! { "Type" => "Page", "Count" => 2i64 }).unwrap();
        assert_eq!(out, b"<</Count 2 /Type /Page >>".to_vec());
    }

    #[test]
    fn unused_object_kinds_are_refused() {
        assert!(serialize(&Object::Boolean(true)).is_err());
        assert!(serialize(&Object::Null).is_err());
    }
}
