//! OOXML part builders for a single-slide presentation package.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::spec::{SpecDeckWriteOptions, SpecTableCell, SpecTableGrid};

const C_XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const C_NS_DRAWINGML: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const C_NS_RELATIONSHIPS_DOC: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const C_NS_PRESENTATIONML: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const C_NS_PACKAGE_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
const C_URI_TABLE: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";

const C_REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const C_REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const C_REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const C_REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const C_REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

/// Package part paths, in write order.
pub const C_PART_CONTENT_TYPES: &str = "[Content_Types].xml";
pub const C_PART_ROOT_RELS: &str = "_rels/.rels";
pub const C_PART_PRESENTATION: &str = "ppt/presentation.xml";
pub const C_PART_PRESENTATION_RELS: &str = "ppt/_rels/presentation.xml.rels";
pub const C_PART_SLIDE_MASTER: &str = "ppt/slideMasters/slideMaster1.xml";
pub const C_PART_SLIDE_MASTER_RELS: &str = "ppt/slideMasters/_rels/slideMaster1.xml.rels";
pub const C_PART_SLIDE_LAYOUT: &str = "ppt/slideLayouts/slideLayout1.xml";
pub const C_PART_SLIDE_LAYOUT_RELS: &str = "ppt/slideLayouts/_rels/slideLayout1.xml.rels";
pub const C_PART_THEME: &str = "ppt/theme/theme1.xml";
pub const C_PART_SLIDE: &str = "ppt/slides/slide1.xml";
pub const C_PART_SLIDE_RELS: &str = "ppt/slides/_rels/slide1.xml.rels";

////////////////////////////////////////////////////////////////////////////////
// #region PackageParts

pub fn derive_content_types_xml() -> String {
    let l_overrides = [
        (
            C_PART_PRESENTATION,
            "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml",
        ),
        (
            C_PART_SLIDE_MASTER,
            "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml",
        ),
        (
            C_PART_SLIDE_LAYOUT,
            "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml",
        ),
        (
            C_PART_SLIDE,
            "application/vnd.openxmlformats-officedocument.presentationml.slide+xml",
        ),
        (
            C_PART_THEME,
            "application/vnd.openxmlformats-officedocument.theme+xml",
        ),
    ];

    let mut c_xml = String::new();
    c_xml.push_str(C_XML_DECLARATION);
    c_xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    c_xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    c_xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    for (c_part, c_content_type) in l_overrides {
        let _ = write!(
            c_xml,
            r#"<Override PartName="/{c_part}" ContentType="{c_content_type}"/>"#
        );
    }
    c_xml.push_str("</Types>");
    c_xml
}

/// Relationship part listing `(id, type, target)` triples.
pub fn derive_relationships_xml(relationships: &[(&str, &str, &str)]) -> String {
    let mut c_xml = String::new();
    c_xml.push_str(C_XML_DECLARATION);
    let _ = write!(c_xml, r#"<Relationships xmlns="{C_NS_PACKAGE_RELATIONSHIPS}">"#);
    for (c_id, c_type, c_target) in relationships {
        let _ = write!(
            c_xml,
            r#"<Relationship Id="{c_id}" Type="{c_type}" Target="{c_target}"/>"#
        );
    }
    c_xml.push_str("</Relationships>");
    c_xml
}

pub fn derive_root_rels_xml() -> String {
    derive_relationships_xml(&[("rId1", C_REL_OFFICE_DOCUMENT, C_PART_PRESENTATION)])
}

pub fn derive_presentation_rels_xml() -> String {
    derive_relationships_xml(&[
        ("rId1", C_REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
        ("rId2", C_REL_SLIDE, "slides/slide1.xml"),
        ("rId3", C_REL_THEME, "theme/theme1.xml"),
    ])
}

pub fn derive_slide_master_rels_xml() -> String {
    derive_relationships_xml(&[
        ("rId1", C_REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
        ("rId2", C_REL_THEME, "../theme/theme1.xml"),
    ])
}

pub fn derive_slide_layout_rels_xml() -> String {
    derive_relationships_xml(&[("rId1", C_REL_SLIDE_MASTER, "../slideMasters/slideMaster1.xml")])
}

pub fn derive_slide_rels_xml() -> String {
    derive_relationships_xml(&[("rId1", C_REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml")])
}

pub fn derive_presentation_xml(options: &SpecDeckWriteOptions) -> String {
    let mut c_xml = String::new();
    c_xml.push_str(C_XML_DECLARATION);
    let _ = write!(
        c_xml,
        r#"<p:presentation xmlns:a="{C_NS_DRAWINGML}" xmlns:r="{C_NS_RELATIONSHIPS_DOC}" xmlns:p="{C_NS_PRESENTATIONML}" saveSubsetFonts="1">"#
    );
    c_xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    c_xml.push_str(r#"<p:sldIdLst><p:sldId id="256" r:id="rId2"/></p:sldIdLst>"#);
    let _ = write!(
        c_xml,
        r#"<p:sldSz cx="{}" cy="{}"/><p:notesSz cx="{}" cy="{}"/>"#,
        options.width_slide_emu,
        options.height_slide_emu,
        options.height_slide_emu,
        options.width_slide_emu
    );
    c_xml.push_str("</p:presentation>");
    c_xml
}

fn derive_group_shape_header() -> &'static str {
    concat!(
        r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
        r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
        r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#
    )
}

pub fn derive_slide_master_xml(options: &SpecDeckWriteOptions) -> String {
    let mut c_xml = String::new();
    c_xml.push_str(C_XML_DECLARATION);
    let _ = write!(
        c_xml,
        r#"<p:sldMaster xmlns:a="{C_NS_DRAWINGML}" xmlns:r="{C_NS_RELATIONSHIPS_DOC}" xmlns:p="{C_NS_PRESENTATIONML}">"#
    );
    c_xml.push_str("<p:cSld><p:spTree>");
    c_xml.push_str(derive_group_shape_header());
    c_xml.push_str(&derive_title_placeholder_xml(options, None));
    c_xml.push_str("</p:spTree></p:cSld>");
    c_xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" "#,
        r#"accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" "#,
        r#"accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#
    ));
    c_xml.push_str(r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#);
    let _ = write!(
        c_xml,
        concat!(
            r#"<p:txStyles><p:titleStyle><a:lvl1pPr algn="l"><a:defRPr sz="{}" b="1">"#,
            r#"<a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
            r#"<a:latin typeface="+mj-lt"/></a:defRPr></a:lvl1pPr></p:titleStyle>"#,
            r#"<p:bodyStyle><a:lvl1pPr><a:defRPr sz="1800"/></a:lvl1pPr></p:bodyStyle>"#,
            r#"<p:otherStyle><a:lvl1pPr><a:defRPr sz="1800"/></a:lvl1pPr></p:otherStyle>"#,
            r#"</p:txStyles>"#
        ),
        options.font_size_title * 100
    );
    c_xml.push_str("</p:sldMaster>");
    c_xml
}

pub fn derive_slide_layout_xml(options: &SpecDeckWriteOptions) -> String {
    let mut c_xml = String::new();
    c_xml.push_str(C_XML_DECLARATION);
    let _ = write!(
        c_xml,
        r#"<p:sldLayout xmlns:a="{C_NS_DRAWINGML}" xmlns:r="{C_NS_RELATIONSHIPS_DOC}" xmlns:p="{C_NS_PRESENTATIONML}" type="titleOnly" preserve="1">"#
    );
    c_xml.push_str(r#"<p:cSld name="Title Only"><p:spTree>"#);
    c_xml.push_str(derive_group_shape_header());
    c_xml.push_str(&derive_title_placeholder_xml(options, None));
    c_xml.push_str("</p:spTree></p:cSld>");
    c_xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    c_xml.push_str("</p:sldLayout>");
    c_xml
}

pub fn derive_theme_xml(options: &SpecDeckWriteOptions) -> String {
    let c_font = escape(options.font_name_theme.as_str());
    let mut c_xml = String::new();
    c_xml.push_str(C_XML_DECLARATION);
    let _ = write!(c_xml, r#"<a:theme xmlns:a="{C_NS_DRAWINGML}" name="perfdeck">"#);
    c_xml.push_str("<a:themeElements>");
    c_xml.push_str(concat!(
        r#"<a:clrScheme name="perfdeck">"#,
        r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
        r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
        r#"<a:dk2><a:srgbClr val="1F497D"/></a:dk2>"#,
        r#"<a:lt2><a:srgbClr val="EEECE1"/></a:lt2>"#,
        r#"<a:accent1><a:srgbClr val="4F81BD"/></a:accent1>"#,
        r#"<a:accent2><a:srgbClr val="C0504D"/></a:accent2>"#,
        r#"<a:accent3><a:srgbClr val="9BBB59"/></a:accent3>"#,
        r#"<a:accent4><a:srgbClr val="8064A2"/></a:accent4>"#,
        r#"<a:accent5><a:srgbClr val="4BACC6"/></a:accent5>"#,
        r#"<a:accent6><a:srgbClr val="F79646"/></a:accent6>"#,
        r#"<a:hlink><a:srgbClr val="0000FF"/></a:hlink>"#,
        r#"<a:folHlink><a:srgbClr val="800080"/></a:folHlink>"#,
        r#"</a:clrScheme>"#
    ));
    let _ = write!(
        c_xml,
        concat!(
            r#"<a:fontScheme name="perfdeck">"#,
            r#"<a:majorFont><a:latin typeface="{0}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
            r#"<a:minorFont><a:latin typeface="{0}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
            r#"</a:fontScheme>"#
        ),
        c_font
    );
    c_xml.push_str(concat!(
        r#"<a:fmtScheme name="perfdeck">"#,
        r#"<a:fillStyleLst>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"</a:fillStyleLst>"#,
        r#"<a:lnStyleLst>"#,
        r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
        r#"<a:ln w="25400"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
        r#"<a:ln w="38100"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
        r#"</a:lnStyleLst>"#,
        r#"<a:effectStyleLst>"#,
        r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
        r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
        r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
        r#"</a:effectStyleLst>"#,
        r#"<a:bgFillStyleLst>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"</a:bgFillStyleLst>"#,
        r#"</a:fmtScheme>"#
    ));
    c_xml.push_str("</a:themeElements>");
    c_xml.push_str("</a:theme>");
    c_xml
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SlideContent

/// Title placeholder shape; `title = None` leaves an empty paragraph.
fn derive_title_placeholder_xml(options: &SpecDeckWriteOptions, title: Option<&str>) -> String {
    let box_title = &options.box_title;
    let mut c_xml = String::new();
    c_xml.push_str(concat!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/>"#,
        r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
        r#"<p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#
    ));
    let _ = write!(
        c_xml,
        r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm></p:spPr>"#,
        box_title.left, box_title.top, box_title.width, box_title.height
    );
    c_xml.push_str(r#"<p:txBody><a:bodyPr anchor="ctr"/><a:lstStyle/><a:p>"#);
    match title {
        Some(c_title) => {
            let _ = write!(
                c_xml,
                r#"<a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r>"#,
                escape(c_title)
            );
        }
        None => c_xml.push_str(r#"<a:endParaRPr lang="en-US"/>"#),
    }
    c_xml.push_str("</a:p></p:txBody></p:sp>");
    c_xml
}

fn derive_run_properties_xml(cell: &SpecTableCell) -> String {
    let mut c_attrs = String::from(r#" lang="en-US""#);
    if let Some(n_sz) = cell.format.font_size_centipoints() {
        let _ = write!(c_attrs, r#" sz="{n_sz}""#);
    }
    if let Some(if_bold) = cell.format.bold {
        let _ = write!(c_attrs, r#" b="{}""#, if if_bold { 1 } else { 0 });
    }
    c_attrs.push_str(r#" dirty="0""#);
    c_attrs
}

fn derive_table_cell_xml(cell: &SpecTableCell) -> String {
    let c_rpr_attrs = derive_run_properties_xml(cell);
    let c_latin = cell
        .format
        .font_name
        .as_deref()
        .map(|c_font| format!(r#"<a:latin typeface="{}"/>"#, escape(c_font)))
        .unwrap_or_default();
    let c_ppr = cell
        .format
        .align
        .map(|align| format!(r#"<a:pPr algn="{}"/>"#, align.as_ooxml()))
        .unwrap_or_default();

    let mut c_xml = String::from("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");
    for c_paragraph in &cell.paragraphs {
        c_xml.push_str("<a:p>");
        c_xml.push_str(&c_ppr);
        if c_paragraph.is_empty() {
            let _ = write!(c_xml, "<a:endParaRPr{c_rpr_attrs}/>");
        } else {
            let _ = write!(
                c_xml,
                "<a:r><a:rPr{c_rpr_attrs}>{c_latin}</a:rPr><a:t>{}</a:t></a:r>",
                escape(c_paragraph.as_str())
            );
        }
        c_xml.push_str("</a:p>");
    }
    if cell.paragraphs.is_empty() {
        let _ = write!(c_xml, "<a:p>{c_ppr}<a:endParaRPr{c_rpr_attrs}/></a:p>");
    }
    c_xml.push_str("</a:txBody>");
    match cell.format.anchor {
        Some(anchor) => {
            let _ = write!(c_xml, r#"<a:tcPr anchor="{}"/>"#, anchor.as_ooxml());
        }
        None => c_xml.push_str("<a:tcPr/>"),
    }
    c_xml.push_str("</a:tc>");
    c_xml
}

/// Graphic frame holding the table, positioned at `(left, top)`.
pub fn derive_table_frame_xml(grid: &SpecTableGrid, left: i64, top: i64) -> String {
    let mut c_xml = String::new();
    c_xml.push_str(concat!(
        r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="3" name="Table 2"/>"#,
        r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#,
        r#"<p:nvPr/></p:nvGraphicFramePr>"#
    ));
    let _ = write!(
        c_xml,
        r#"<p:xfrm><a:off x="{left}" y="{top}"/><a:ext cx="{}" cy="{}"/></p:xfrm>"#,
        grid.width_emu(),
        grid.height_emu()
    );
    let _ = write!(
        c_xml,
        r#"<a:graphic><a:graphicData uri="{C_URI_TABLE}"><a:tbl><a:tblPr firstRow="1" bandRow="1"/><a:tblGrid>"#
    );
    for n_width in &grid.widths_emu {
        let _ = write!(c_xml, r#"<a:gridCol w="{n_width}"/>"#);
    }
    c_xml.push_str("</a:tblGrid>");
    for row in &grid.rows {
        let _ = write!(c_xml, r#"<a:tr h="{}">"#, row.height_emu);
        for cell in &row.cells {
            c_xml.push_str(&derive_table_cell_xml(cell));
        }
        c_xml.push_str("</a:tr>");
    }
    c_xml.push_str("</a:tbl></a:graphicData></a:graphic></p:graphicFrame>");
    c_xml
}

/// Slide with a title placeholder and one table frame.
pub fn derive_slide_xml(options: &SpecDeckWriteOptions, title: &str, grid: &SpecTableGrid) -> String {
    let mut c_xml = String::new();
    c_xml.push_str(C_XML_DECLARATION);
    let _ = write!(
        c_xml,
        r#"<p:sld xmlns:a="{C_NS_DRAWINGML}" xmlns:r="{C_NS_RELATIONSHIPS_DOC}" xmlns:p="{C_NS_PRESENTATIONML}">"#
    );
    c_xml.push_str("<p:cSld><p:spTree>");
    c_xml.push_str(derive_group_shape_header());
    c_xml.push_str(&derive_title_placeholder_xml(options, Some(title)));
    c_xml.push_str(&derive_table_frame_xml(
        grid,
        options.left_table_emu,
        options.top_table_emu,
    ));
    c_xml.push_str("</p:spTree></p:cSld>");
    c_xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    c_xml.push_str("</p:sld>");
    c_xml
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
