//! Image XObjects

use crate::constants::IMAGE_JPEG_QUALITY;
use crate::types::Result;
use image::codecs::jpeg::JpegEncoder;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;

/// Load the image at `path` and add it to `output` as a DCT-encoded XObject.
pub(crate) fn create_image_xobject(output: &mut Document, path: &Path) -> Result<ObjectId> {
    let rgb = image::open(path)?.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut jpeg, IMAGE_JPEG_QUALITY))?;

    let dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(width as i64)),
        ("Height", Object::Integer(height as i64)),
        ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
        ("BitsPerComponent", Object::Integer(8)),
        ("Filter", Object::Name(b"DCTDecode".to_vec())),
    ]);

    log::debug!("embedded image {} ({}x{} px)", path.display(), width, height);

    Ok(output.add_object(Stream::new(dict, jpeg)))
}
