use std::{fmt, io, path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    MajorSteps,
    AllSteps,
}

pub(crate) struct SvgOutput<'a, Style> {
    pub context: &'a SvgContext,
    pub style: Style,
    content: String,
}

impl<'a, Style> SvgOutput<'a, Style> {
    pub fn new(context: &'a SvgContext, style: Style) -> Self {
        Self {
            context,
            style,
            content: String::new(),
        }
    }

    pub fn append_element<State, E: SvgElement<Style, State>>(&mut self, element: &E, state: &State) -> fmt::Result {
        element.write_svg(self, state)
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);
        
        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, self.context.view_y_min, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a, Style> fmt::Write for SvgOutput<'a, Style> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SvgElementStyle {
    Hide,
    Standard,
    Highlight,
}

/// Selects how the fragments of one snapshot are drawn
pub(crate) struct SvgSeparationStyle {
    highlight: Option<usize>,
    pub add_labels: bool,
}

impl Default for SvgSeparationStyle {
    fn default() -> Self {
        Self {
            highlight: None,
            add_labels: true,
        }
    }
}

impl SvgSeparationStyle {
    pub fn highlight_fragment(id: usize) -> Self {
        Self {
            highlight: Some(id),
            ..Self::default()
        }
    }

    pub fn get_f_style(&self, id: usize) -> SvgElementStyle {
        match self.highlight {
            Some(highlight) if highlight == id => SvgElementStyle::Highlight,
            _ => SvgElementStyle::Standard,
        }
    }
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
}

impl SvgContext {
    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

pub(crate) trait SvgElement<Style, State=()> {
    fn write_svg<'a>(&self, svg_output: &mut SvgOutput<'a, Style>, state: &State) -> fmt::Result;
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
    }
}
