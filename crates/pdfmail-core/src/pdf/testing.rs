//! In-memory PDF fixtures for tests.

use lopdf::{dictionary, Document, Object, Stream};

/// Build a PDF with one page per entry. Each non-empty entry is drawn as a
/// single line of Helvetica text; an empty entry gives a page with no text.
pub(crate) fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    pdf_with_page_lines(&texts.iter().map(|t| vec![*t]).collect::<Vec<_>>())
}

/// Build a PDF where each page draws its lines top to bottom.
pub(crate) fn pdf_with_page_lines(pages: &[Vec<&str>]) -> Vec<u8> {
    let contents: Vec<String> = pages
        .iter()
        .map(|lines| {
            let mut content = String::new();
            for (i, line) in lines.iter().filter(|l| !l.is_empty()).enumerate() {
                let y = 720 - (i as i64) * 20;
                content.push_str(&format!("BT /F1 12 Tf 72 {y} Td ({line}) Tj ET\n"));
            }
            content
        })
        .collect();
    pdf_with_contents(&contents)
}

/// Build a PDF with one raw content stream per page. Only `/F1`
/// (Helvetica) is defined in the page resources.
pub(crate) fn pdf_with_contents(contents: &[String]) -> Vec<u8> {
    save(build_document(contents))
}

/// A one-page PDF whose trailer declares Standard security with password
/// hashes no password opens.
pub(crate) fn encrypted_pdf() -> Vec<u8> {
    let mut doc = build_document(&["BT /F1 12 Tf 72 720 Td (secret@locked.org) Tj ET".to_string()]);

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => Object::Integer(1),
        "R" => Object::Integer(2),
        "Length" => Object::Integer(40),
        "O" => Object::string_literal(vec![0x11u8; 32]),
        "U" => Object::string_literal(vec![0x22u8; 32]),
        "P" => Object::Integer(-4),
    });
    doc.trailer.set("Encrypt", Object::Reference(encrypt_id));
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(vec![0x33u8; 16]),
            Object::string_literal(vec![0x33u8; 16]),
        ],
    );

    save(doc)
}

fn build_document(contents: &[String]) -> Document {
    let mut doc = Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for content in contents {
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.clone().into_bytes()));

        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(contents.len() as i64),
    });

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
