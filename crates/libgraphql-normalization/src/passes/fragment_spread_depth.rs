use indexmap::IndexMap;
use indexmap::IndexSet;
use libgraphql_ast::ExternalError;
use libgraphql_ast::Node;
use libgraphql_ast::refs::FragmentSpreadRef;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

/// Where one fragment spread sits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpreadDepth {
    /// The fragment the spread refers to.
    pub fragment_name: String,
    /// The fragment definition containing the spread, `None` for spreads
    /// inside operations.
    pub containing_fragment: Option<String>,
    /// Selection set nesting of the spread inside its operation or
    /// fragment definition.
    pub relative_depth: usize,
    /// `relative_depth` plus the depth of the deepest spread of the
    /// containing fragment.
    pub depth: usize,
}

/// Depths of every spread of a Document, in walk order.
#[derive(Clone, Debug, Default)]
pub struct FragmentSpreadDepths {
    spreads: IndexMap<FragmentSpreadRef, SpreadDepth>,
}

impl FragmentSpreadDepths {
    pub fn get(&self, spread: FragmentSpreadRef) -> Option<&SpreadDepth> {
        self.spreads.get(&spread)
    }

    pub fn depth(&self, spread: FragmentSpreadRef) -> Option<usize> {
        self.get(spread).map(|spread| spread.depth)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FragmentSpreadRef, &SpreadDepth)> {
        self.spreads.iter().map(|(r, depth)| (*r, depth))
    }

    pub fn len(&self) -> usize {
        self.spreads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spreads.is_empty()
    }

    fn fragment_depth(&self, fragment: &str, memo: &mut IndexMap<String, usize>) -> usize {
        if let Some(depth) = memo.get(fragment) {
            return *depth;
        }
        let mut depth = 0;
        for spread in self.spreads.values() {
            if spread.fragment_name == fragment {
                depth = depth.max(self.spread_depth(spread, memo));
            }
        }
        memo.insert(fragment.to_owned(), depth);
        depth
    }

    fn spread_depth(&self, spread: &SpreadDepth, memo: &mut IndexMap<String, usize>) -> usize {
        let outer = match &spread.containing_fragment {
            Some(containing) => self.fragment_depth(containing, memo),
            None => 0,
        };
        spread.relative_depth + outer
    }
}

/// Records the depth of every fragment spread and validates the spreads
/// along the way: a spread of an undefined fragment stops the walk with
/// `FragmentUndefined`, and fragments spreading each other in a cycle stop
/// it with `FragmentSpreadFormsCycle`.
///
/// The absolute depths are resolved when the document has been walked;
/// [`FragmentSpreadInlining`](crate::passes::FragmentSpreadInlining) uses
/// them to inline the innermost spreads first.
#[derive(Debug, Default)]
pub struct FragmentSpreadDepth {
    depths: FragmentSpreadDepths,
    /// fragment -> fragments it spreads
    spread_graph: IndexMap<String, IndexSet<String>>,
}

impl FragmentSpreadDepth {
    pub fn depths(&self) -> &FragmentSpreadDepths {
        &self.depths
    }

    pub fn into_depths(self) -> FragmentSpreadDepths {
        self.depths
    }

    /// The first cycle through the spread graph, as the chain of fragment
    /// names walked until a name repeats.
    fn find_cycle(&self) -> Option<Vec<String>> {
        let mut finished: IndexSet<&str> = IndexSet::new();
        for fragment in self.spread_graph.keys() {
            let mut path = vec![];
            if let Some(cycle) = self.visit(fragment, &mut path, &mut finished) {
                return Some(cycle);
            }
        }
        None
    }

    fn visit<'a>(
        &'a self,
        fragment: &'a str,
        path: &mut Vec<&'a str>,
        finished: &mut IndexSet<&'a str>,
    ) -> Option<Vec<String>> {
        if let Some(start) = path.iter().position(|name| *name == fragment) {
            let mut cycle: Vec<String> = path[start..].iter().map(|name| (*name).to_owned()).collect();
            cycle.push(fragment.to_owned());
            return Some(cycle);
        }
        if finished.contains(fragment) {
            return None;
        }
        path.push(fragment);
        if let Some(spreads) = self.spread_graph.get(fragment) {
            for spread in spreads {
                if let Some(cycle) = self.visit(spread, path, finished) {
                    return Some(cycle);
                }
            }
        }
        path.pop();
        finished.insert(fragment);
        None
    }
}

impl Visitor for FragmentSpreadDepth {
    fn enter_document(&mut self, _ctx: &mut WalkContext<'_>) {
        self.depths.spreads.clear();
        self.spread_graph.clear();
    }

    fn enter_fragment_spread(&mut self, ctx: &mut WalkContext<'_>, node: FragmentSpreadRef) {
        let doc = &*ctx.operation;
        let fragment_name = doc.fragment_spread_name(node).to_owned();
        if doc.fragment_definition_ref(&fragment_name).is_none() {
            let error = ExternalError::fragment_undefined(&fragment_name).at(doc[node].position);
            ctx.stop_with_external_err(error);
            return;
        }
        if self.depths.spreads.contains_key(&node) {
            return;
        }

        let relative_depth = ctx
            .ancestors()
            .iter()
            .filter(|ancestor| matches!(ancestor, Node::SelectionSet(_)))
            .count();
        let containing_fragment = match ctx.ancestors().first() {
            Some(Node::FragmentDefinition(fragment)) => {
                Some(doc.fragment_definition_name(*fragment).to_owned())
            },
            _ => None,
        };
        if let Some(containing) = &containing_fragment {
            self.spread_graph
                .entry(containing.clone())
                .or_default()
                .insert(fragment_name.clone());
        }
        self.depths.spreads.insert(
            node,
            SpreadDepth {
                fragment_name,
                containing_fragment,
                relative_depth,
                depth: relative_depth,
            },
        );
    }

    fn leave_document(&mut self, ctx: &mut WalkContext<'_>) {
        if let Some(cycle) = self.find_cycle() {
            let chain: Vec<&str> = cycle.iter().map(String::as_str).collect();
            ctx.stop_with_external_err(ExternalError::fragment_spread_forms_cycle(&chain));
            return;
        }

        let mut memo = IndexMap::new();
        let resolved: Vec<usize> = self
            .depths
            .spreads
            .values()
            .map(|spread| self.depths.spread_depth(spread, &mut memo))
            .collect();
        for (spread, depth) in self.depths.spreads.values_mut().zip(resolved) {
            spread.depth = depth;
        }
    }
}
