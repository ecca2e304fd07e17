//! A minimal control-flow graph over one function's body.
//!
//! This exists for downstream analyses that want a statement-level graph;
//! it plays no part in type inference. Nodes are indices into `Graph`'s own
//! vector rather than borrowed AST references, so a `Graph` can outlive the
//! builder call without fighting lifetimes.

use tip_ast::{Block, Function, Ident, Return, Stmt};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CfgNodeIdx(usize);

impl CfgNodeIdx {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// One control-flow node. `Stmt` covers `Assign`/`Output`/`Block`; `If` and
/// `While` are instead split into their own `Condition` plus a `Nop` merge
/// point by the builder, so this enum never holds an `If`/`While` directly.
#[derive(Clone, Debug)]
pub enum CfgNode {
    Entry { name: Ident, params: Vec<Ident> },
    Exit { return_stmt: Return },
    Condition { cond: Box<tip_ast::Expr> },
    Stmt(Stmt),
    /// A no-op merge point, eliminated by `Graph::build_function` before
    /// the graph is returned; never observed by callers.
    Nop,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EdgeKind {
    Plain,
    True,
    False,
}

#[derive(Clone, Copy, Debug)]
pub struct CfgEdge {
    pub from: CfgNodeIdx,
    pub to: CfgNodeIdx,
    pub kind: EdgeKind,
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<CfgNode>,
    edges: Vec<CfgEdge>,
}

impl Graph {
    pub fn nodes(&self) -> &[CfgNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[CfgEdge] {
        &self.edges
    }

    pub fn predecessors(&self, node: CfgNodeIdx) -> impl Iterator<Item = CfgNodeIdx> + '_ {
        self.edges.iter().filter(move |e| e.to == node).map(|e| e.from)
    }

    pub fn successors(&self, node: CfgNodeIdx) -> impl Iterator<Item = CfgNodeIdx> + '_ {
        self.edges.iter().filter(move |e| e.from == node).map(|e| e.to)
    }

    pub fn build_program(program: &tip_ast::Program) -> Vec<Graph> {
        program.functions.iter().map(Graph::build_function).collect()
    }

    pub fn build_function(func: &Function) -> Graph {
        let mut g = Graph::default();
        let entry = g.push_node(CfgNode::Entry {
            name: func.name.clone(),
            params: func.params.names.clone(),
        });
        let exit = g.push_node(CfgNode::Exit {
            return_stmt: func.body.return_stmt.clone(),
        });

        let last = g.build_stmts(&func.body.stmts, entry, EdgeKind::Plain);
        g.push_edge(last, exit, EdgeKind::Plain);
        g.eliminate_nops();
        g
    }

    fn push_node(&mut self, node: CfgNode) -> CfgNodeIdx {
        let idx = CfgNodeIdx(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    fn push_edge(&mut self, from: CfgNodeIdx, to: CfgNodeIdx, kind: EdgeKind) {
        self.edges.push(CfgEdge { from, to, kind });
    }

    /// Builds a statement chain, linking `entry` to the first produced node
    /// with `entry_kind` (relevant only when `entry` is a `Condition`: it
    /// picks which branch this chain represents). Returns the chain's exit
    /// node, or `entry` itself if `stmts` is empty.
    fn build_stmts(&mut self, stmts: &[Stmt], entry: CfgNodeIdx, entry_kind: EdgeKind) -> CfgNodeIdx {
        let mut prev = entry;
        for (i, stmt) in stmts.iter().enumerate() {
            let kind = if i == 0 { entry_kind } else { EdgeKind::Plain };
            prev = self.build_stmt(stmt, prev, kind);
        }
        prev
    }

    fn build_stmt(&mut self, stmt: &Stmt, entry: CfgNodeIdx, entry_kind: EdgeKind) -> CfgNodeIdx {
        match stmt {
            Stmt::Block(Block { stmts, .. }) => self.build_stmts(stmts, entry, entry_kind),
            Stmt::If(if_stmt) => {
                let cond_node = self.push_node(CfgNode::Condition {
                    cond: Box::new(if_stmt.cond.clone()),
                });
                self.push_edge(entry, cond_node, entry_kind);
                let merge = self.push_node(CfgNode::Nop);

                if if_stmt.then_branch.stmts.is_empty() {
                    self.push_edge(cond_node, merge, EdgeKind::True);
                } else {
                    let true_exit = self.build_stmts(&if_stmt.then_branch.stmts, cond_node, EdgeKind::True);
                    self.push_edge(true_exit, merge, EdgeKind::Plain);
                }

                match &if_stmt.else_branch {
                    None => self.push_edge(cond_node, merge, EdgeKind::False),
                    Some(else_branch) if else_branch.stmts.is_empty() => {
                        self.push_edge(cond_node, merge, EdgeKind::False);
                    }
                    Some(else_branch) => {
                        let false_exit = self.build_stmts(&else_branch.stmts, cond_node, EdgeKind::False);
                        self.push_edge(false_exit, merge, EdgeKind::Plain);
                    }
                }
                merge
            }
            Stmt::While(while_stmt) => {
                let cond_node = self.push_node(CfgNode::Condition {
                    cond: Box::new(while_stmt.cond.clone()),
                });
                self.push_edge(entry, cond_node, entry_kind);

                if while_stmt.body.stmts.is_empty() {
                    self.push_edge(cond_node, cond_node, EdgeKind::True);
                } else {
                    let body_exit = self.build_stmts(&while_stmt.body.stmts, cond_node, EdgeKind::True);
                    self.push_edge(body_exit, cond_node, EdgeKind::Plain);
                }

                let merge = self.push_node(CfgNode::Nop);
                self.push_edge(cond_node, merge, EdgeKind::False);
                merge
            }
            _ => {
                let node = self.push_node(CfgNode::Stmt(stmt.clone()));
                self.push_edge(entry, node, entry_kind);
                node
            }
        }
    }

    /// Rewire every predecessor of a `Nop` directly to its successors, then
    /// drop the `Nop` nodes and the edges that touched them. Each rewired
    /// edge keeps the kind of the edge that used to lead into the `Nop` —
    /// e.g. a `while`'s `Condition -> merge` edge is `False`, and that
    /// `False` must survive onto `Condition -> successor`. A `Nop`'s own
    /// outgoing edges are always `Plain` (it never sits downstream of a
    /// branch itself), so this never needs to invent a kind beyond what
    /// the incoming edge already carried.
    fn eliminate_nops(&mut self) {
        let nop_indices: Vec<CfgNodeIdx> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| matches!(n, CfgNode::Nop))
            .map(|(i, _)| CfgNodeIdx(i))
            .collect();

        for &nop in &nop_indices {
            let preds: Vec<(CfgNodeIdx, EdgeKind)> = self
                .edges
                .iter()
                .filter(|e| e.to == nop)
                .map(|e| (e.from, e.kind))
                .collect();
            let succs: Vec<CfgNodeIdx> = self.successors(nop).collect();
            for &(pred, kind) in &preds {
                for &succ in &succs {
                    self.push_edge(pred, succ, kind);
                }
            }
        }

        self.edges
            .retain(|e| !nop_indices.contains(&e.from) && !nop_indices.contains(&e.to));
        // Node indices referenced by the retained edges stay stable because
        // we never remove non-`Nop` nodes; `Nop` slots are simply left
        // unreferenced and unreachable from iteration over `edges()`.
    }
}
