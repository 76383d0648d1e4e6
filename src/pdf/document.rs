// Single-page PDF 1.4 serialization. The whole file format lives in this
// module: object bodies, the cross-reference table, and the trailer. The
// xref offsets are byte positions into the encoded buffer, so all length
// bookkeeping happens on `Vec<u8>`, never on `str` character counts.

const HEADER: &[u8] = b"%PDF-1.4\n";

/// Assemble a complete single-page document around the given content
/// stream. Objects are emitted in ascending index order: catalog, page
/// tree, page, font, content stream.
pub fn assemble(content: &[u8], width: u32, height: u32) -> Vec<u8> {
    let mut stream_obj = format!("5 0 obj\n<< /Length {} >>\nstream\n", content.len()).into_bytes();
    stream_obj.extend_from_slice(content);
    stream_obj.extend_from_slice(b"\nendstream\nendobj\n");

    let objects: [Vec<u8>; 5] = [
        b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_vec(),
        b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n".to_vec(),
        format!(
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {width} {height}] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>\nendobj\n"
        )
        .into_bytes(),
        b"4 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n".to_vec(),
        stream_obj,
    ];

    let mut out = Vec::with_capacity(HEADER.len() + content.len() + 512);
    out.extend_from_slice(HEADER);

    let mut offsets = Vec::with_capacity(objects.len());
    for object in &objects {
        offsets.push(out.len());
        out.extend_from_slice(object);
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }

    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    out
}
