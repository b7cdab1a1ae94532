use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use super::layout::{Align, Element, FontFace, Page, Tint, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use super::ReportError;
use crate::report::layout::text_width;

const MM_PER_PT: f64 = 0.3528;

struct Faces {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Faces {
    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
            FontFace::Oblique => &self.oblique,
        }
    }
}

fn fill(layer: &PdfLayerReference, tint: Tint) {
    layer.set_fill_color(Color::Rgb(Rgb::new(tint.r, tint.g, tint.b, None)));
}

/// Draw laid-out pages into a PDF byte buffer using the builtin Helvetica
/// faces, so the document needs no font embedding.
pub(crate) fn render(title: &str, pages: &[Page]) -> Result<Vec<u8>, ReportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");

    let faces = Faces {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|err| ReportError::Rendering(err.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|err| ReportError::Rendering(err.to_string()))?,
        oblique: doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|err| ReportError::Rendering(err.to_string()))?,
    };

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for placed in page {
            draw(&layer, &faces, placed.y, &placed.element);
        }
    }

    doc.save_to_bytes()
        .map_err(|err| ReportError::Rendering(err.to_string()))
}

fn draw(layer: &PdfLayerReference, faces: &Faces, y_top: f64, element: &Element) {
    match element {
        Element::Text {
            text,
            size,
            face,
            color,
            align,
        } => {
            let x = match align {
                Align::Left => MARGIN,
                Align::Center => (PAGE_WIDTH - text_width(text, *size)) / 2.0,
            };
            fill(layer, *color);
            layer.use_text(
                text.clone(),
                *size,
                Mm(x),
                Mm(baseline(y_top, *size)),
                faces.get(*face),
            );
        }
        Element::TaggedLine {
            text,
            size,
            tag,
            tag_color,
        } => {
            fill(layer, super::layout::BLACK);
            layer.use_text(
                text.clone(),
                *size,
                Mm(MARGIN),
                Mm(baseline(y_top, *size)),
                faces.get(FontFace::Regular),
            );

            let tag_x = PAGE_WIDTH - MARGIN - text_width(tag, *size);
            fill(layer, *tag_color);
            layer.use_text(
                tag.clone(),
                *size,
                Mm(tag_x),
                Mm(baseline(y_top, *size)),
                faces.get(FontFace::Bold),
            );
        }
        Element::Rule => {
            let y = PAGE_HEIGHT - y_top - 1.0;
            let rule = Line {
                points: vec![
                    (Point::new(Mm(MARGIN), Mm(y)), false),
                    (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(y)), false),
                ],
                is_closed: false,
                has_fill: false,
                has_stroke: true,
                is_clipping_path: false,
            };
            layer.set_outline_color(Color::Rgb(Rgb::new(0.62, 0.64, 0.68, None)));
            layer.set_outline_thickness(0.4);
            layer.add_shape(rule);
        }
        // Spacers are consumed during pagination and never placed.
        Element::Spacer(_) => {}
    }
}

/// Convert a top-based offset into the PDF's bottom-left baseline coordinate.
fn baseline(y_top: f64, size: f64) -> f64 {
    PAGE_HEIGHT - y_top - size * MM_PER_PT
}
