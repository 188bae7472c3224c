//! End-to-end oracle checks over a canned fabric, driving the queries the
//! way the annealing search does: probe, bind, re-validate, score.

use floe_fabric::{BelType, Fabric, FabricView, Location};
use floe_netlist::{
    Cell, CellKind, GlobalBufferSpec, IoCellSpec, IoPinType, LogicCellSpec, Net, Netlist,
    NetlistCellId, NetlistNetId, PinName,
};
use floe_place::{is_bel_location_valid, is_valid_bel_for_cell, score_bel_for_cell};

fn dff_cell(name: &str, clk: NetlistNetId, inputs: u32) -> Cell {
    Cell::new(
        name,
        CellKind::Logic(LogicCellSpec {
            dff_enable: true,
            neg_clk: false,
            cen: None,
            clk: Some(clk),
            sr: None,
            input_count: inputs,
        }),
    )
}

fn place(
    netlist: &Netlist,
    fabric: &mut Fabric,
    cell: NetlistCellId,
    bel: floe_fabric::FabricBelId,
) {
    assert!(is_valid_bel_for_cell(
        netlist,
        fabric,
        netlist.cell(cell),
        bel
    ));
    fabric.bind(bel, cell).unwrap();
    assert!(is_bel_location_valid(netlist, fabric, bel));
}

#[test]
fn logic_tile_fills_until_controls_or_budget_conflict() {
    let mut fabric = Fabric::ice40_like(6, 5);
    let mut nl = Netlist::new();
    let n1 = nl.add_net(Net::new("n1"));
    let n2 = nl.add_net(Net::new("n2"));

    let tile = fabric.bels_in_tile(2, 2);

    // A lone DFF cell: one local clock + 4 inputs = 5, well under budget.
    let a = nl.add_cell(dff_cell("a", n1, 4));
    place(&nl, &mut fabric, a, tile[0]);

    // A clashing clock is rejected outright.
    let b = dff_cell("b", n2, 4);
    assert!(!is_valid_bel_for_cell(&nl, &fabric, &b, tile[1]));

    // A control-compatible heavyweight still fits: 1 + 4 + 20 = 25.
    let c = nl.add_cell(dff_cell("c", n1, 20));
    place(&nl, &mut fabric, c, tile[1]);

    // The next one would land at 1 + 4 + 20 + 8 = 33 and is rejected.
    let d = dff_cell("d", n1, 8);
    assert!(!is_valid_bel_for_cell(&nl, &fabric, &d, tile[2]));

    // A smaller sibling at 1 + 4 + 20 + 7 = 32 sits exactly at the limit.
    let e = nl.add_cell(dff_cell("e", n1, 7));
    place(&nl, &mut fabric, e, tile[2]);
}

#[test]
fn desirability_tracks_tile_occupancy() {
    let mut fabric = Fabric::ice40_like(6, 5);
    let mut nl = Netlist::new();
    let n1 = nl.add_net(Net::new("n1"));

    let tile = fabric.bels_in_tile(3, 2);
    let probe = dff_cell("probe", n1, 2);

    assert_eq!(score_bel_for_cell(&fabric, &probe, tile[0]), 8);

    let a = nl.add_cell(dff_cell("a", n1, 2));
    fabric.bind(tile[5], a).unwrap();
    let b = nl.add_cell(dff_cell("b", n1, 2));
    fabric.bind(tile[6], b).unwrap();

    assert_eq!(score_bel_for_cell(&fabric, &probe, tile[0]), 6);

    // A combinational probe is indifferent to the same occupancy.
    let free = Cell::new(
        "free",
        CellKind::Logic(LogicCellSpec {
            dff_enable: false,
            neg_clk: false,
            cen: None,
            clk: None,
            sr: None,
            input_count: 2,
        }),
    );
    assert_eq!(score_bel_for_cell(&fabric, &free, tile[0]), 8);
}

#[test]
fn io_pair_shares_clocks_and_excludes_lvds_neighbours() {
    let mut fabric = Fabric::ice40_like(6, 5);
    let mut nl = Netlist::new();
    let oclk = nl.add_net(Net::new("oclk"));
    let oclk2 = nl.add_net(Net::new("oclk2"));

    let io0 = fabric.bel_by_location(Location::new(0, 2, 0)).unwrap();
    let io1 = fabric.bel_by_location(Location::new(0, 2, 1)).unwrap();

    // Two registered-output IOs on one pair must share the output clock.
    let mut a = Cell::new(
        "a",
        CellKind::Io(IoCellSpec {
            lvds: false,
            pin_type: IoPinType::from_bits(0b000101),
        }),
    );
    a.connect(PinName::OutputClk, oclk);
    let a = nl.add_cell(a);

    let mut b = Cell::new(
        "b",
        CellKind::Io(IoCellSpec {
            lvds: false,
            pin_type: IoPinType::from_bits(0b000101),
        }),
    );
    b.connect(PinName::OutputClk, oclk2);
    let b_id = nl.add_cell(b);

    place(&nl, &mut fabric, a, io0);
    assert!(!is_valid_bel_for_cell(&nl, &fabric, nl.cell(b_id), io1));

    nl.cell_mut(b_id).connect(PinName::OutputClk, oclk);
    place(&nl, &mut fabric, b_id, io1);

    // An LVDS input needs a whole pair: z 1 never works, and an occupied
    // complement blocks z 0.
    let lvds = Cell::new(
        "lvds",
        CellKind::Io(IoCellSpec {
            lvds: true,
            pin_type: IoPinType::from_bits(0b000001),
        }),
    );
    let pair0 = fabric.bel_by_location(Location::new(0, 3, 0)).unwrap();
    let pair1 = fabric.bel_by_location(Location::new(0, 3, 1)).unwrap();
    assert!(!is_valid_bel_for_cell(&nl, &fabric, &lvds, pair1));
    assert!(is_valid_bel_for_cell(&nl, &fabric, &lvds, pair0));

    let blocker = nl.add_cell(Cell::new(
        "blocker",
        CellKind::Io(IoCellSpec {
            lvds: false,
            pin_type: IoPinType::from_bits(0b000001),
        }),
    ));
    fabric.bind(pair1, blocker).unwrap();
    assert!(!is_valid_bel_for_cell(&nl, &fabric, &lvds, pair0));
}

#[test]
fn unbonded_pads_reject_io_cells() {
    let fabric = Fabric::ice40_like(6, 5);
    let nl = Netlist::new();

    let cell = Cell::new(
        "in",
        CellKind::Io(IoCellSpec {
            lvds: false,
            pin_type: IoPinType::from_bits(0b000001),
        }),
    );

    let unbonded = fabric.bel_by_location(Location::new(0, 1, 0)).unwrap();
    assert!(!is_valid_bel_for_cell(&nl, &fabric, &cell, unbonded));

    let bonded = fabric.bel_by_location(Location::new(0, 2, 0)).unwrap();
    assert!(is_valid_bel_for_cell(&nl, &fabric, &cell, bonded));
}

#[test]
fn pll_claims_its_pad_unless_named() {
    let mut fabric = Fabric::ice40_like(6, 5);
    let mut nl = Netlist::new();
    let refclk = nl.add_net(Net::new("refclk"));

    let pll_bel = fabric.bels_of_type(BelType::PllSite)[0];
    let pad_bel = fabric.bel_by_location(Location::new(3, 0, 0)).unwrap();

    let mut pad = Cell::new(
        "pad",
        CellKind::Io(IoCellSpec {
            lvds: false,
            pin_type: IoPinType::from_bits(0b000001),
        }),
    );
    pad.connect(PinName::DIn0, refclk);
    let pad = nl.add_cell(pad);

    let pll = nl.add_cell(Cell::new(
        "pll",
        CellKind::Pll(floe_netlist::PllSpec { dual_output: false }),
    ));
    fabric.bind(pll_bel, pll).unwrap();

    // The PLL occupies the pad's input path: a reading IO is rejected.
    assert!(!is_valid_bel_for_cell(&nl, &fabric, nl.cell(pad), pad_bel));

    // Naming the site as the PLL's pad input admits exactly that IO.
    let name = fabric.bel_name(pad_bel).to_string();
    nl.cell_mut(pll)
        .set_attr(floe_netlist::ATTR_PAD_INPUT_BEL, name);
    assert!(is_valid_bel_for_cell(&nl, &fabric, nl.cell(pad), pad_bel));
}

#[test]
fn global_buffers_split_by_network_parity() {
    let mut fabric = Fabric::ice40_like(6, 5);
    let mut nl = Netlist::new();

    let mut rst = Net::new("rst");
    rst.is_reset = true;
    let rst = nl.add_net(rst);
    let mut cen = Net::new("cen");
    cen.is_enable = true;
    let cen = nl.add_net(cen);

    let mk_buffer = |nl: &mut Netlist, name: &str, net: NetlistNetId| {
        let mut cell = Cell::new(
            name,
            CellKind::GlobalBuffer(GlobalBufferSpec { for_pad_in: false }),
        );
        cell.connect(PinName::GlobalBufferOutput, net);
        nl.add_cell(cell)
    };
    let gb_rst = mk_buffer(&mut nl, "gb_rst", rst);
    let gb_cen = mk_buffer(&mut nl, "gb_cen", cen);

    let mut even_ok = 0;
    let mut odd_ok = 0;
    for bel in fabric.bels_of_type(BelType::GlobalBufferSite) {
        let network = fabric.driven_global_network(bel).unwrap();
        let rst_legal = is_valid_bel_for_cell(&nl, &fabric, nl.cell(gb_rst), bel);
        let cen_legal = is_valid_bel_for_cell(&nl, &fabric, nl.cell(gb_cen), bel);
        assert_eq!(rst_legal, network % 2 == 0);
        assert_eq!(cen_legal, network % 2 == 1);
        if rst_legal {
            even_ok += 1;
        }
        if cen_legal {
            odd_ok += 1;
        }
    }
    assert_eq!(even_ok, 4);
    assert_eq!(odd_ok, 4);

    // Commit one legal assignment and re-validate it in place.
    let even_site = fabric
        .bels_of_type(BelType::GlobalBufferSite)
        .into_iter()
        .find(|&b| fabric.driven_global_network(b) == Some(2))
        .unwrap();
    place(&nl, &mut fabric, gb_rst, even_site);
}
