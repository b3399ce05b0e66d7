use std::collections::VecDeque;

use num_traits::real::Real;
use smallvec::SmallVec;

use crate::{Coords, PieceBuilder, PieceFormat, Polygon, PolygonWinding, SeparationError, Vertex, errors::{DecompositionFailure, FailureCause}, fragment::{Fragment, FragmentIdx}, idx::SliceExt, math};

#[cfg(feature = "debugging")]
use std::fmt;
#[cfg(feature = "debugging")]
use crate::debug;

/// A cut through a fragment: the ray from `i1` through the reflex vertex `i2` meets the
/// edge `j1`-`j2` at `hit`
#[derive(Debug, Clone, Copy)]
struct Split<C: Real> {
    i1: FragmentIdx<C>,
    i2: FragmentIdx<C>,
    j1: FragmentIdx<C>,
    j2: FragmentIdx<C>,
    hit: Coords<C>,
}

impl<C: Real> Split<C> {
    /// Finds the edge closest to the reflex vertex following `i1` which the ray through it hits
    fn find(fragment: &Fragment<C>, i1: FragmentIdx<C>) -> Option<Self> {
        let vs = fragment.vertices();
        let i2 = i1.next_wrapped(vs);
        let (p1, p2) = (&vs[i1], &vs[i2]);

        let mut closest: Option<(C, Self)> = None;
        for j1 in vs.iter_index().filter(|&j| j != i1 && j != i2) {
            let j2 = j1.next_wrapped(vs);
            if let Some(hit) = math::hit_ray(p1, p2, &vs[j1], &vs[j2]) {
                let distance = p2.distance_squared(&hit);
                if closest.as_ref().map_or(true, |(min_distance, _)| distance < *min_distance) {
                    closest = Some((distance, Self { i1, i2, j1, j2, hit }));
                }
            }
        }
        closest.map(|(_, split)| split)
    }

    /// Cuts `fragment` along the split into two clockwise fragments, identified by `ids`
    fn cut(&self, fragment: &Fragment<C>, ids: (usize, usize)) -> Result<(Fragment<C>, Fragment<C>), DecompositionFailure> {
        let vs = fragment.vertices();
        let (p1, p2) = (vs[self.i1], vs[self.i2]);
        let (v1, v2) = (vs[self.j1], vs[self.j2]);

        // Walks backward from p1 to v2, then reverses to restore clockwise order
        let mut a: SmallVec<[Coords<C>; 8]> = SmallVec::new();
        if !math::points_equal(&self.hit, &v2) {
            a.push(self.hit);
        }
        walk(vs, self.i1, self.j2, &p1, |k| k.prev_wrapped(vs), &mut a)?;
        a.reverse();

        let mut b: SmallVec<[Coords<C>; 8]> = SmallVec::new();
        if !math::points_equal(&self.hit, &v1) {
            b.push(self.hit);
        }
        walk(vs, self.i2, self.j1, &p2, |k| k.next_wrapped(vs), &mut b)?;

        Ok((Fragment::new(ids.0, a), Fragment::new(ids.1, b)))
    }
}

/// Collects the vertices from `start` up to `end`, stepping with `step`.
///
/// The vertex at `end` is left out when it lies on the segment between the vertex before it
/// and `anchor`, which would otherwise leave a zero-area spike in the fragment.
fn walk<C: Real>(vs: &[Coords<C>], start: FragmentIdx<C>, end: FragmentIdx<C>, anchor: &Coords<C>, step: impl Fn(FragmentIdx<C>) -> FragmentIdx<C>, out: &mut SmallVec<[Coords<C>; 8]>) -> Result<(), DecompositionFailure> {
    let mut prev = None;
    let mut k = start;
    loop {
        if k != end {
            out.push(vs[k]);
        } else {
            let prev = prev.ok_or_else(|| DecompositionFailure::new(FailureCause::CutWalkExhausted, format!("Cut walk from v{} ended at its first vertex", start.usize())))?;
            if !math::point_on_segment(&vs[end], &vs[prev], anchor) {
                out.push(vs[end]);
            }
            return Ok(());
        }
        prev = Some(k);
        k = step(k);
    }
}

/// Separates one polygon by repeatedly cutting non-convex fragments in two.
///
/// Fragments are processed first-in first-out, so pieces are emitted in the order they are
/// found to be convex.
pub(crate) struct SeparationState<V: Vertex> {
    queue: VecDeque<Fragment<V::Coordinate>>,
    input_count: usize,
    next_id: usize,
    split_count: usize,
    split_limit: usize,
    #[cfg(feature = "debugging")]
    svg_context: Option<debug::svg::SvgContext>,
    #[cfg(feature = "debugging")]
    current_step: u32,
    #[cfg(feature = "debugging")]
    lineage: Vec<LineageNode>,
    #[cfg(feature = "debugging")]
    emitted: Vec<Fragment<V::Coordinate>>,
}

impl<V: Vertex> SeparationState<V> {
    pub fn new<P: Polygon<Vertex=V> + ?Sized>(polygon: &P) -> Self {
        let fragment = Fragment::from_polygon(polygon);
        let n = fragment.len();

        #[cfg(feature = "debugging")]
        let svg_context = Self::svg_context(&fragment);
        #[cfg(feature = "debugging")]
        let lineage = vec![LineageNode::new()];

        let mut queue = VecDeque::with_capacity(n);
        queue.push_back(fragment);

        Self {
            queue,
            input_count: polygon.vertex_count(),
            next_id: 1,
            split_count: 0,
            // Every split of a valid polygon consumes a reflex vertex, so this is only reached by malformed input
            split_limit: n * n + 8,
            #[cfg(feature = "debugging")]
            svg_context,
            #[cfg(feature = "debugging")]
            current_step: 0,
            #[cfg(feature = "debugging")]
            lineage,
            #[cfg(feature = "debugging")]
            emitted: Vec::new(),
        }
    }

    pub fn separate<PF: PieceFormat<V>>(mut self, format: PF) -> Result<<PF::Builder as PieceBuilder<V>>::Output, SeparationError<<PF::Builder as PieceBuilder<V>>::Error>> {
        if self.input_count < 3 {
            return Err(SeparationError::NotEnoughVertices(self.input_count));
        }
        if let Some(fragment) = self.queue.front() {
            if fragment.len() < 3 {
                return Err(SeparationError::NotEnoughVertices(fragment.len()));
            }
        }

        let mut builder = format.initialize()?;
        // Separate out the actual separation logic, so PieceBuilder error handling can be consolidated to one location
        let result = self.separate_inner(&mut builder);

        #[cfg(feature = "debugging")]
        self.output_result();

        match result {
            Ok(()) => builder.build().map_err(SeparationError::PieceBuilder),
            Err(err) => {
                builder.fail(&err);
                Err(err)
            }
        }
    }

    fn separate_inner<PB: PieceBuilder<V>>(&mut self, builder: &mut PB) -> Result<(), SeparationError<PB::Error>> {
        while let Some(fragment) = self.queue.pop_front() {
            match fragment.find_reflex() {
                None => self.resolve_convex(fragment, builder)?,
                Some(i1) => {
                    self.split_count += 1;
                    if self.split_count > self.split_limit {
                        return Err(SeparationError::failure(FailureCause::SplitLimitExceeded, format!("Exceeded {} splits for a polygon of {} vertices", self.split_limit, self.input_count)));
                    }

                    let split = Split::find(&fragment, i1)
                        .ok_or_else(|| SeparationError::failure(FailureCause::NoSplitFound, format!("No edge of {} is hit by the ray through v{}", fragment, i1.next_wrapped(fragment.vertices()).usize())))?;
                    let ids = (self.next_id, self.next_id + 1);
                    self.next_id += 2;
                    let (a, b) = split.cut(&fragment, ids).map_err(SeparationError::DecompositionFailure)?;

                    #[cfg(feature = "debugging")]
                    self.record_split(&fragment, &split, &a, &b);

                    self.queue.push_back(a);
                    self.queue.push_back(b);
                }
            }
        }
        Ok(())
    }

    fn resolve_convex<PB: PieceBuilder<V>>(&mut self, fragment: Fragment<V::Coordinate>, builder: &mut PB) -> Result<(), SeparationError<PB::Error>> {
        if fragment.is_degenerate() {
            #[cfg(feature = "debugging")]
            self.record_outcome(fragment.id(), LineageOutcome::Dropped);
            return Ok(());
        }

        let vs = fragment.vertices();
        match PB::WINDING {
            PolygonWinding::Clockwise => Self::emit_piece(vs.iter(), builder)?,
            PolygonWinding::Counterclockwise => Self::emit_piece(vs.iter().rev(), builder)?,
        }

        #[cfg(feature = "debugging")]
        {
            self.record_outcome(fragment.id(), LineageOutcome::Emitted);
            self.emitted.push(fragment);
        }
        Ok(())
    }

    fn emit_piece<'c, PB, I>(mut cs: I, builder: &mut PB) -> Result<(), PB::Error>
    where V::Coordinate: 'c,
          PB: PieceBuilder<V>,
          I: Iterator<Item=&'c Coords<V::Coordinate>> {
        if let (Some(c0), Some(c1), Some(c2)) = (cs.next(), cs.next(), cs.next()) {
            builder.new_piece(c0.into_vertex(), c1.into_vertex(), c2.into_vertex())?;
            for c in cs {
                builder.extend_piece(c.into_vertex())?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "debugging")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineageOutcome {
    Pending,
    Split,
    Emitted,
    Dropped,
}

#[cfg(feature = "debugging")]
struct LineageNode {
    label: String,
    outcome: LineageOutcome,
    children: Option<(usize, usize)>,
}

#[cfg(feature = "debugging")]
impl LineageNode {
    fn new() -> Self {
        Self {
            label: String::new(),
            outcome: LineageOutcome::Pending,
            children: None,
        }
    }
}

#[cfg(feature = "debugging")]
impl fmt::Display for LineageNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.outcome, self.label)
    }
}

#[cfg(feature = "debugging")]
impl<V: Vertex> SeparationState<V> {
    fn svg_context(fragment: &Fragment<V::Coordinate>) -> Option<debug::svg::SvgContext> {
        let output_path = debug::env::svg::output_path()?;
        let output_level = debug::env::svg::output_level();
        let show_labels = debug::env::svg::show_labels();

        if output_level == debug::svg::SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for [x, y] in fragment.vertices().iter().map(Coords::to_f32) {
            view_x_min = view_x_min.min(x);
            view_x_max = view_x_max.max(x);
            view_y_min = view_y_min.min(y);
            view_y_max = view_y_max.max(y);
        }

        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        let margin_scale = 0.1;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        Some(debug::svg::SvgContext {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
        })
    }

    fn record_outcome(&mut self, id: usize, outcome: LineageOutcome) {
        if let Some(node) = self.lineage.get_mut(id) {
            node.outcome = outcome;
        }
    }

    fn record_split(&mut self, fragment: &Fragment<V::Coordinate>, split: &Split<V::Coordinate>, a: &Fragment<V::Coordinate>, b: &Fragment<V::Coordinate>) {
        if let Some(node) = self.lineage.get_mut(fragment.id()) {
            node.outcome = LineageOutcome::Split;
            node.label = format!("{} cut at {}", fragment, split.hit);
            node.children = Some((a.id(), b.id()));
        }
        for child in [a, b] {
            let mut node = LineageNode::new();
            node.label = child.to_string();
            self.lineage.push(node);
        }

        if let Some(svg_context) = &self.svg_context {
            if svg_context.output_level >= debug::svg::SvgOutputLevel::MajorSteps {
                let step: std::path::PathBuf = format!("{:03}", self.current_step).into();
                if std::fs::create_dir_all(svg_context.output_path.join(&step)).is_err() {
                    return;
                }

                let mut svg = debug::svg::SvgOutput::new(svg_context, debug::svg::SvgSeparationStyle::highlight_fragment(fragment.id()));
                let _ = svg.append_element(fragment, &());
                let _ = svg.append_element(split, fragment);
                let _ = svg.save(step.join("000.svg"));

                if svg_context.output_level >= debug::svg::SvgOutputLevel::AllSteps {
                    let mut svg = debug::svg::SvgOutput::new(svg_context, debug::svg::SvgSeparationStyle::default());
                    let _ = svg.append_element(a, &());
                    let _ = svg.append_element(b, &());
                    let _ = svg.save(step.join("001.svg"));
                }
            }
        }
        self.current_step += 1;
    }

    fn output_result(&self) {
        if let Some(svg_context) = &self.svg_context {
            let mut svg = debug::svg::SvgOutput::new(svg_context, debug::svg::SvgSeparationStyle::default());
            for fragment in &self.emitted {
                let _ = svg.append_element(fragment, &());
            }
            let _ = svg.save("result.svg");

            let path = svg_context.output_path.join("splits.txt");
            if let Ok(f) = std::fs::File::create(path) {
                use std::io::Write;

                let mut w = std::io::BufWriter::new(&f);
                let _ = writeln!(w, "{}", self.lineage_tree(0));
            }
        }
    }

    fn lineage_tree(&self, id: usize) -> text_trees::TreeNode<String> {
        let node = &self.lineage[id];
        match node.children {
            Some((a, b)) => text_trees::TreeNode::with_child_nodes(node.to_string(), vec![self.lineage_tree(a), self.lineage_tree(b)].into_iter()),
            None => node.to_string().into(),
        }
    }
}

#[cfg(feature = "debugging")]
impl<C: Real> debug::svg::SvgElement<debug::svg::SvgSeparationStyle> for Fragment<C> {
    fn write_svg<'b>(&self, svg_output: &mut debug::svg::SvgOutput<'b, debug::svg::SvgSeparationStyle>, _state: &()) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        let fill = match svg_output.style.get_f_style(self.id()) {
            debug::svg::SvgElementStyle::Hide => return Ok(()),
            debug::svg::SvgElementStyle::Standard => rgb(200, 220, 255),
            debug::svg::SvgElementStyle::Highlight => rgb(255, 200, 120),
        };

        let points: Vec<_> = self.vertices().iter().map(Coords::to_f32).collect();
        writeln!(svg_output, "{}",
            polygon(&points)
                .fill(Fill::Color(fill))
                .stroke(Stroke::Color(black(), svg_output.context.percent(0.3)))
        )?;

        if svg_output.context.show_labels && svg_output.style.add_labels {
            let count = points.len().max(1) as f32;
            let x = points.iter().map(|p| p[0]).sum::<f32>() / count;
            let y = points.iter().map(|p| p[1]).sum::<f32>() / count;
            writeln!(svg_output, "{}",
                text(x, y, format!("f{}", self.id()))
                    .color(black())
                    .align(Align::Center)
                    .size(svg_output.context.percent(3.0))
            )?;
        }
        Ok(())
    }
}

#[cfg(feature = "debugging")]
impl<C: Real> debug::svg::SvgElement<debug::svg::SvgSeparationStyle, Fragment<C>> for Split<C> {
    fn write_svg<'b>(&self, svg_output: &mut debug::svg::SvgOutput<'b, debug::svg::SvgSeparationStyle>, state: &Fragment<C>) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        let vs = state.vertices();
        let [x1, y1] = vs[self.i1].to_f32();
        let [x2, y2] = vs[self.i2].to_f32();
        let [hx, hy] = self.hit.to_f32();
        let [ex1, ey1] = vs[self.j1].to_f32();
        let [ex2, ey2] = vs[self.j2].to_f32();

        writeln!(svg_output, "{}",
            line_segment(ex1, ey1, ex2, ey2)
                .color(blue())
                .width(svg_output.context.percent(0.6))
        )?;
        writeln!(svg_output, "{}",
            line_segment(x1, y1, hx, hy)
                .color(red())
                .width(svg_output.context.percent(0.3))
        )?;
        writeln!(svg_output, "{}",
            debug::svg::circle(x2, y2, svg_output.context.percent(1.0))
                .fill(Fill::Color(rgb(255, 126, 0)))
        )?;
        writeln!(svg_output, "{}",
            debug::svg::circle(hx, hy, svg_output.context.percent(1.0))
                .fill(Fill::Color(red()))
        )?;
        Ok(())
    }
}
