// Static data tables: font glyphs, tracker periods, restart positions,
// string tables and the built-in Amiga/Atari resource directories.

// 96 glyphs, 8 bytes per glyph, one bit per pixel.
pub const FONT: [u8; 768] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00,
    0x28, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x24, 0x7E, 0x24, 0x24, 0x7E, 0x24, 0x00,
    0x08, 0x3E, 0x48, 0x3C, 0x12, 0x7C, 0x10, 0x00, 0x42, 0xA4, 0x48, 0x10, 0x24, 0x4A, 0x84, 0x00,
    0x60, 0x90, 0x90, 0x70, 0x8A, 0x84, 0x7A, 0x00, 0x08, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x06, 0x08, 0x10, 0x10, 0x10, 0x08, 0x06, 0x00, 0xC0, 0x20, 0x10, 0x10, 0x10, 0x20, 0xC0, 0x00,
    0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00, 0x10, 0x10, 0x7C, 0x10, 0x10, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x20, 0x00, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x10, 0x28, 0x10, 0x00, 0x00, 0x04, 0x08, 0x10, 0x20, 0x40, 0x00, 0x00,
    0x78, 0x84, 0x8C, 0x94, 0xA4, 0xC4, 0x78, 0x00, 0x10, 0x30, 0x50, 0x10, 0x10, 0x10, 0x7C, 0x00,
    0x78, 0x84, 0x04, 0x08, 0x30, 0x40, 0xFC, 0x00, 0x78, 0x84, 0x04, 0x38, 0x04, 0x84, 0x78, 0x00,
    0x08, 0x18, 0x28, 0x48, 0xFC, 0x08, 0x08, 0x00, 0xFC, 0x80, 0xF8, 0x04, 0x04, 0x84, 0x78, 0x00,
    0x38, 0x40, 0x80, 0xF8, 0x84, 0x84, 0x78, 0x00, 0xFC, 0x04, 0x04, 0x08, 0x10, 0x20, 0x40, 0x00,
    0x78, 0x84, 0x84, 0x78, 0x84, 0x84, 0x78, 0x00, 0x78, 0x84, 0x84, 0x7C, 0x04, 0x08, 0x70, 0x00,
    0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x10, 0x10, 0x60,
    0x04, 0x08, 0x10, 0x20, 0x10, 0x08, 0x04, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0xFE, 0x00, 0x00,
    0x20, 0x10, 0x08, 0x04, 0x08, 0x10, 0x20, 0x00, 0x7C, 0x82, 0x02, 0x0C, 0x10, 0x00, 0x10, 0x00,
    0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00, 0x78, 0x84, 0x84, 0xFC, 0x84, 0x84, 0x84, 0x00,
    0xF8, 0x84, 0x84, 0xF8, 0x84, 0x84, 0xF8, 0x00, 0x78, 0x84, 0x80, 0x80, 0x80, 0x84, 0x78, 0x00,
    0xF8, 0x84, 0x84, 0x84, 0x84, 0x84, 0xF8, 0x00, 0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x7C, 0x00,
    0xFC, 0x80, 0x80, 0xF0, 0x80, 0x80, 0x80, 0x00, 0x7C, 0x80, 0x80, 0x8C, 0x84, 0x84, 0x7C, 0x00,
    0x84, 0x84, 0x84, 0xFC, 0x84, 0x84, 0x84, 0x00, 0x7C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x7C, 0x00,
    0x04, 0x04, 0x04, 0x04, 0x84, 0x84, 0x78, 0x00, 0x8C, 0x90, 0xA0, 0xE0, 0x90, 0x88, 0x84, 0x00,
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xFC, 0x00, 0x82, 0xC6, 0xAA, 0x92, 0x82, 0x82, 0x82, 0x00,
    0x84, 0xC4, 0xA4, 0x94, 0x8C, 0x84, 0x84, 0x00, 0x78, 0x84, 0x84, 0x84, 0x84, 0x84, 0x78, 0x00,
    0xF8, 0x84, 0x84, 0xF8, 0x80, 0x80, 0x80, 0x00, 0x78, 0x84, 0x84, 0x84, 0x84, 0x8C, 0x7C, 0x03,
    0xF8, 0x84, 0x84, 0xF8, 0x90, 0x88, 0x84, 0x00, 0x78, 0x84, 0x80, 0x78, 0x04, 0x84, 0x78, 0x00,
    0x7C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x84, 0x84, 0x84, 0x84, 0x84, 0x84, 0x78, 0x00,
    0x84, 0x84, 0x84, 0x84, 0x84, 0x48, 0x30, 0x00, 0x82, 0x82, 0x82, 0x82, 0x92, 0xAA, 0xC6, 0x00,
    0x82, 0x44, 0x28, 0x10, 0x28, 0x44, 0x82, 0x00, 0x82, 0x44, 0x28, 0x10, 0x10, 0x10, 0x10, 0x00,
    0xFC, 0x04, 0x08, 0x10, 0x20, 0x40, 0xFC, 0x00, 0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00,
    0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00, 0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00,
    0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE,
    0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00, 0x00, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00,
    0x40, 0x40, 0x78, 0x44, 0x44, 0x44, 0x78, 0x00, 0x00, 0x00, 0x3C, 0x40, 0x40, 0x40, 0x3C, 0x00,
    0x04, 0x04, 0x3C, 0x44, 0x44, 0x44, 0x3C, 0x00, 0x00, 0x00, 0x38, 0x44, 0x7C, 0x40, 0x3C, 0x00,
    0x38, 0x44, 0x40, 0x60, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x78,
    0x40, 0x40, 0x58, 0x64, 0x44, 0x44, 0x44, 0x00, 0x10, 0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00,
    0x02, 0x00, 0x02, 0x02, 0x02, 0x02, 0x42, 0x3C, 0x40, 0x40, 0x46, 0x48, 0x70, 0x48, 0x46, 0x00,
    0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00, 0xEC, 0x92, 0x92, 0x92, 0x92, 0x00,
    0x00, 0x00, 0x78, 0x44, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00,
    0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40, 0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x04,
    0x00, 0x00, 0x4C, 0x70, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00, 0x3C, 0x40, 0x38, 0x04, 0x78, 0x00,
    0x10, 0x10, 0x3C, 0x10, 0x10, 0x10, 0x0C, 0x00, 0x00, 0x00, 0x44, 0x44, 0x44, 0x44, 0x78, 0x00,
    0x00, 0x00, 0x44, 0x44, 0x44, 0x28, 0x10, 0x00, 0x00, 0x00, 0x82, 0x82, 0x92, 0xAA, 0xC6, 0x00,
    0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00, 0x42, 0x22, 0x24, 0x18, 0x08, 0x30,
    0x00, 0x00, 0x7C, 0x08, 0x10, 0x20, 0x7C, 0x00, 0x60, 0x90, 0x20, 0x40, 0xF0, 0x00, 0x00, 0x00,
    0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0x00, 0x38, 0x44, 0xBA, 0xA2, 0xBA, 0x44, 0x38, 0x00,
    0x38, 0x44, 0x82, 0x82, 0x44, 0x28, 0xEE, 0x00, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA,
];

// Scene index to (part, entry position) mapping.
pub const SCENE_POS: [(u16, i16); 36] = [
    (16008, 0), (16001, 0), (16002, 10), (16002, 12), (16002, 14),
    (16003, 20), (16003, 24), (16003, 26), (16004, 30), (16004, 31),
    (16004, 32), (16004, 33), (16004, 34), (16004, 35), (16004, 36),
    (16004, 37), (16004, 38), (16004, 39), (16004, 40), (16004, 41),
    (16004, 42), (16004, 43), (16004, 44), (16004, 45), (16004, 46),
    (16004, 47), (16004, 48), (16004, 49), (16006, 64), (16006, 65),
    (16006, 66), (16006, 67), (16006, 68), (16005, 50), (16006, 60),
    (16007, 0),
];

// Amiga Paula period values indexed by the playSound frequency operand.
pub const PERIOD_TABLE: [u16; 40] = [
    1076, 1016, 960, 906, 856, 808, 762, 720, 678, 640,
    604, 570, 538, 508, 480, 453, 428, 404, 381, 360,
    339, 320, 302, 285, 269, 254, 240, 226, 214, 202,
    190, 180, 170, 160, 151, 143, 135, 127, 120, 113,
];

// French string table.
pub const STRINGS_FR: &[(u16, &str)] = &[
    (0x001, "P E A N U T  3000"),
    (0x002, "Copyright  } 1990 Peanut Computer, Inc.\nAll rights reserved.\n\nCDOS Version 5.01"),
    (0x003, "2"),
    (0x004, "3"),
    (0x005, "."),
    (0x006, "A"),
    (0x007, "@"),
    (0x008, "PEANUT 3000"),
    (0x00A, "R"),
    (0x00B, "U"),
    (0x00C, "N"),
    (0x00D, "P"),
    (0x00E, "R"),
    (0x00F, "O"),
    (0x010, "J"),
    (0x011, "E"),
    (0x012, "C"),
    (0x013, "T"),
    (0x014, "Shield 9A.5f Ok"),
    (0x015, "Flux % 5.0177 Ok"),
    (0x016, "CDI Vector ok"),
    (0x017, " %%%ddd ok"),
    (0x018, "Race-Track ok"),
    (0x019, "SYNCHROTRON"),
    (0x01A, "E: 23%\ng: .005\n\nRK: 77.2L\n\nopt: g+\n\n Shield:\n1: OFF\n2: ON\n3: ON\n\nP~: 1\n"),
    (0x01B, "ON"),
    (0x01C, "-"),
    (0x021, "|"),
    (0x022, "--- Etude theorique ---"),
    (0x023, " L'EXPERIENCE DEBUTERA DANS    SECONDES."),
    (0x024, "20"),
    (0x025, "19"),
    (0x026, "18"),
    (0x027, "4"),
    (0x028, "3"),
    (0x029, "2"),
    (0x02A, "1"),
    (0x02B, "0"),
    (0x02C, "L E T ' S   G O"),
    (0x031, "- Phase 0:\nINJECTION des particules\ndans le synchrotron"),
    (0x032, "- Phase 1:\nACCELERATION des particules."),
    (0x033, "- Phase 2:\nEJECTION des particules\nsur le bouclier."),
    (0x034, "A  N  A  L  Y  S  E"),
    (0x035, "- RESULTAT:\nProbabilites de creer de:\n ANTI-MATIERE: 91.V %\n NEUTRINO 27:  0.04 %\n NEUTRINO 424: 18 %\n"),
    (0x036, "Verification par la pratique O/N ?"),
    (0x037, "SUR ?"),
    (0x038, "MODIFICATION DES PARAMETRES\nRELATIFS A L'ACCELERATEUR\nDE PARTICULES (SYNCHROTRON)."),
    (0x039, "SIMULATION DE L'EXPERIENCE ?"),
    (0x03C, "t---t"),
    (0x03D, "000 ~"),
    (0x03E, ".20x14dd"),
    (0x03F, "gj5r5r"),
    (0x040, "tilgor 25%"),
    (0x041, "12% 33% checked"),
    (0x042, "D=4.2158005584"),
    (0x043, "d=10.00001"),
    (0x044, "+"),
    (0x045, "*"),
    (0x046, "% 304"),
    (0x047, "gurgle 21"),
    (0x048, "{{{{"),
    (0x049, "Delphine Software"),
    (0x04A, "By Eric Chahi"),
    (0x04B, "5"),
    (0x04C, "17"),
    (0x12C, "0"),
    (0x12D, "1"),
    (0x12E, "2"),
    (0x12F, "3"),
    (0x130, "4"),
    (0x131, "5"),
    (0x132, "6"),
    (0x133, "7"),
    (0x134, "8"),
    (0x135, "9"),
    (0x136, "A"),
    (0x137, "B"),
    (0x138, "C"),
    (0x139, "D"),
    (0x13A, "E"),
    (0x13B, "F"),
    (0x13C, "       CODE D'ACCES:"),
    (0x13D, "PRESSEZ LE BOUTON POUR CONTINUER"),
    (0x13E, "   ENTRER LE CODE D'ACCES"),
    (0x13F, "MOT DE PASSE INVALIDE !"),
    (0x140, "ANNULER"),
    (0x141, "     INSEREZ LA DISQUETTE ?\n\n\n\n\n\n\n\n\nPRESSEZ UNE TOUCHE POUR CONTINUER"),
    (0x142, "SELECTIONNER LES SYMBOLES CORRESPONDANTS\nA LA POSITION\nDE LA ROUE DE PROTECTION"),
    (0x143, "CHARGEMENT..."),
    (0x144, "             ERREUR"),
    (0x15E, "LDKD"),
    (0x15F, "HTDC"),
    (0x160, "CLLD"),
    (0x161, "FXLC"),
    (0x162, "KRFK"),
    (0x163, "XDDJ"),
    (0x164, "LBKG"),
    (0x165, "KLFB"),
    (0x166, "TTCT"),
    (0x167, "DDRX"),
    (0x168, "TBHK"),
    (0x169, "BRTD"),
    (0x16A, "CKJL"),
    (0x16B, "LFCK"),
    (0x16C, "BFLX"),
    (0x16D, "XJRT"),
    (0x16E, "HRTB"),
    (0x16F, "HBHK"),
    (0x170, "JCGB"),
    (0x171, "HHFL"),
    (0x172, "TFBB"),
    (0x173, "TXHF"),
    (0x174, "JHJL"),
    (0x181, "PAR"),
    (0x182, "ERIC CHAHI"),
    (0x183, "          MUSIQUES ET BRUITAGES"),
    (0x184, "DE"),
    (0x185, "JEAN-FRANCOIS FREITAS"),
    (0x186, "VERSION IBM PC"),
    (0x187, "      PAR"),
    (0x188, " DANIEL MORAIS"),
    (0x18B, "PUIS PRESSER LE BOUTON"),
    (0x18C, "POSITIONNER LE JOYSTICK EN HAUT A GAUCHE"),
    (0x18D, " POSITIONNER LE JOYSTICK AU CENTRE"),
    (0x18E, " POSITIONNER LE JOYSTICK EN BAS A DROITE"),
    (0x258, "       Conception ..... Eric Chahi"),
    (0x259, "    Programmation ..... Eric Chahi"),
    (0x25A, "     Graphismes ....... Eric Chahi"),
    (0x25B, "Musique de ...... Jean-francois Freitas"),
    (0x25C, "              Bruitages"),
    (0x25D, "        Jean-Francois Freitas\n             Eric Chahi"),
    (0x263, "               Merci a"),
    (0x264, "           Jesus Martinez\n\n          Daniel Morais\n\n        Frederic Savoir\n\n      Cecile Chahi\n\n    Philippe Delamarre\n\n  Philippe Ulrich\n\nSebastien Berthet\n\nPierre Gousseau"),
    (0x265, "Now Go Back To Another Earth"),
    (0x190, "Bonsoir professeur."),
    (0x191, "Je vois que Monsieur a pris\nsa Ferrari."),
    (0x192, "IDENTIFICATION"),
    (0x193, "Monsieur est en parfaite sante."),
    (0x194, "O"),
    (0x193, "AU BOULOT !!!\n"),
];

// English string table.
pub const STRINGS_EN: &[(u16, &str)] = &[
    (0x001, "P E A N U T  3000"),
    (0x002, "Copyright  } 1990 Peanut Computer, Inc.\nAll rights reserved.\n\nCDOS Version 5.01"),
    (0x003, "2"),
    (0x004, "3"),
    (0x005, "."),
    (0x006, "A"),
    (0x007, "@"),
    (0x008, "PEANUT 3000"),
    (0x00A, "R"),
    (0x00B, "U"),
    (0x00C, "N"),
    (0x00D, "P"),
    (0x00E, "R"),
    (0x00F, "O"),
    (0x010, "J"),
    (0x011, "E"),
    (0x012, "C"),
    (0x013, "T"),
    (0x014, "Shield 9A.5f Ok"),
    (0x015, "Flux % 5.0177 Ok"),
    (0x016, "CDI Vector ok"),
    (0x017, " %%%ddd ok"),
    (0x018, "Race-Track ok"),
    (0x019, "SYNCHROTRON"),
    (0x01A, "E: 23%\ng: .005\n\nRK: 77.2L\n\nopt: g+\n\n Shield:\n1: OFF\n2: ON\n3: ON\n\nP~: 1\n"),
    (0x01B, "ON"),
    (0x01C, "-"),
    (0x021, "|"),
    (0x022, "--- Theoretical study ---"),
    (0x023, " THE EXPERIMENT WILL BEGIN IN    SECONDS"),
    (0x024, "  20"),
    (0x025, "  19"),
    (0x026, "  18"),
    (0x027, "  4"),
    (0x028, "  3"),
    (0x029, "  2"),
    (0x02A, "  1"),
    (0x02B, "  0"),
    (0x02C, "L E T ' S   G O"),
    (0x031, "- Phase 0:\nINJECTION of particles\ninto synchrotron"),
    (0x032, "- Phase 1:\nParticle ACCELERATION."),
    (0x033, "- Phase 2:\nEJECTION of particles\non the shield."),
    (0x034, "A  N  A  L  Y  S  I  S"),
    (0x035, "- RESULT:\nProbability of creating:\n ANTIMATTER: 91.V %\n NEUTRINO 27:  0.04 %\n NEUTRINO 424: 18 %\n"),
    (0x036, "   Practical verification Y/N ?"),
    (0x037, "SURE ?"),
    (0x038, "MODIFICATION OF PARAMETERS\nRELATING TO PARTICLE\nACCELERATOR (SYNCHROTRON)."),
    (0x039, "       RUN EXPERIMENT ?"),
    (0x03C, "t---t"),
    (0x03D, "000 ~"),
    (0x03E, ".20x14dd"),
    (0x03F, "gj5r5r"),
    (0x040, "tilgor 25%"),
    (0x041, "12% 33% checked"),
    (0x042, "D=4.2158005584"),
    (0x043, "d=10.00001"),
    (0x044, "+"),
    (0x045, "*"),
    (0x046, "% 304"),
    (0x047, "gurgle 21"),
    (0x048, "{{{{"),
    (0x049, "Delphine Software"),
    (0x04A, "By Eric Chahi"),
    (0x04B, "  5"),
    (0x04C, "  17"),
    (0x12C, "0"),
    (0x12D, "1"),
    (0x12E, "2"),
    (0x12F, "3"),
    (0x130, "4"),
    (0x131, "5"),
    (0x132, "6"),
    (0x133, "7"),
    (0x134, "8"),
    (0x135, "9"),
    (0x136, "A"),
    (0x137, "B"),
    (0x138, "C"),
    (0x139, "D"),
    (0x13A, "E"),
    (0x13B, "F"),
    (0x13C, "        ACCESS CODE:"),
    (0x13D, "PRESS BUTTON OR RETURN TO CONTINUE"),
    (0x13E, "   ENTER ACCESS CODE"),
    (0x13F, "   INVALID PASSWORD !"),
    (0x140, "ANNULER"),
    (0x141, "      INSERT DISK ?\n\n\n\n\n\n\n\n\nPRESS ANY KEY TO CONTINUE"),
    (0x142, " SELECT SYMBOLS CORRESPONDING TO\n THE POSITION\n ON THE CODE WHEEL"),
    (0x143, "    LOADING..."),
    (0x144, "              ERROR"),
    (0x15E, "LDKD"),
    (0x15F, "HTDC"),
    (0x160, "CLLD"),
    (0x161, "FXLC"),
    (0x162, "KRFK"),
    (0x163, "XDDJ"),
    (0x164, "LBKG"),
    (0x165, "KLFB"),
    (0x166, "TTCT"),
    (0x167, "DDRX"),
    (0x168, "TBHK"),
    (0x169, "BRTD"),
    (0x16A, "CKJL"),
    (0x16B, "LFCK"),
    (0x16C, "BFLX"),
    (0x16D, "XJRT"),
    (0x16E, "HRTB"),
    (0x16F, "HBHK"),
    (0x170, "JCGB"),
    (0x171, "HHFL"),
    (0x172, "TFBB"),
    (0x173, "TXHF"),
    (0x174, "JHJL"),
    (0x181, " BY"),
    (0x182, "ERIC CHAHI"),
    (0x183, "         MUSIC AND SOUND EFFECTS"),
    (0x184, " "),
    (0x185, "JEAN-FRANCOIS FREITAS"),
    (0x186, "IBM PC VERSION"),
    (0x187, "      BY"),
    (0x188, " DANIEL MORAIS"),
    (0x18B, "       THEN PRESS FIRE"),
    (0x18C, " PUT THE PADDLE ON THE UPPER LEFT CORNER"),
    (0x18D, "PUT THE PADDLE IN CENTRAL POSITION"),
    (0x18E, "PUT THE PADDLE ON THE LOWER RIGHT CORNER"),
    (0x258, "      Designed by ..... Eric Chahi"),
    (0x259, "    Programmed by...... Eric Chahi"),
    (0x25A, "      Artwork ......... Eric Chahi"),
    (0x25B, "Music by ........ Jean-francois Freitas"),
    (0x25C, "            Sound effects"),
    (0x25D, "        Jean-Francois Freitas\n             Eric Chahi"),
    (0x263, "              Thanks To"),
    (0x264, "           Jesus Martinez\n\n          Daniel Morais\n\n        Frederic Savoir\n\n      Cecile Chahi\n\n    Philippe Delamarre\n\n  Philippe Ulrich\n\nSebastien Berthet\n\nPierre Gousseau"),
    (0x265, "Now Go Out Of This World"),
    (0x190, "Good evening professor."),
    (0x191, "I see you have driven here in your\nFerrari."),
    (0x192, "IDENTIFICATION"),
    (0x193, "Monsieur est en parfaite sante."),
    (0x194, "Y\n"),
    (0x193, "AU BOULOT !!!\n"),
];

// Extra strings used by the DOS demo version.
pub const STRINGS_DEMO: &[(u16, &str)] = &[
    (0x1F4, "Over Two Years in the Making"),
    (0x1F5, "   A New, State\nof the Art, Polygon\n  Graphics System"),
    (0x1F6, "   Comes to the\nComputer With Full\n Screen Graphics"),
    (0x1F7, "While conducting a nuclear fission\nexperiment at your local\nparticle accelerator ..."),
    (0x1F8, "Nature decides to put a little\n    extra spin on the ball"),
    (0x1F9, "And sends you ..."),
    (0x1FA, "     Out of this World\nA Cinematic Action Adventure\n from Interplay Productions\n                    \n       By Eric CHAHI      \n\n  IBM version : D.MORAIS\n"),
];

// Directory entry for data sets that ship without a memlist file:
// (type, bank number, bank offset, packed size, unpacked size).
pub type DirEntry = (u8, u8, u32, u32, u32);

// Amiga, French release (bank01 is 244674 bytes).
pub const DIR_AMIGA_FR: [DirEntry; 146] = [
    (0, 0x1, 0x000000, 0x0000, 0x0000),
    (0, 0x1, 0x000000, 0x1A3C, 0x1A3C),
    (0, 0x1, 0x001A3C, 0x2E34, 0x2E34),
    (0, 0x1, 0x004870, 0x69F8, 0x69F8),
    (0, 0x1, 0x00B268, 0x45CE, 0x45CE),
    (0, 0x1, 0x00F836, 0x0EFA, 0x0EFA),
    (0, 0x1, 0x010730, 0x0D26, 0x0D26),
    (1, 0x1, 0x011456, 0x0494, 0x3CC0),
    (0, 0x2, 0x000000, 0x2674, 0x2674),
    (0, 0x1, 0x0118EA, 0x2BB6, 0x2BB6),
    (0, 0x1, 0x0144A0, 0x2BB4, 0x2BB4),
    (0, 0x1, 0x017054, 0x0426, 0x0426),
    (0, 0x1, 0x01747A, 0x1852, 0x1852),
    (0, 0x1, 0x018CCC, 0x0594, 0x0594),
    (0, 0x1, 0x019260, 0x13F0, 0x13F0),
    (0, 0x1, 0x01A650, 0x079E, 0x079E),
    (0, 0x2, 0x002674, 0x56A2, 0x56A2),
    (6, 0xC, 0x000000, 0x6214, 0x6214),
    (2, 0x5, 0x000000, 0x2410, 0x7D00),
    (2, 0x5, 0x002410, 0x7D00, 0x7D00),
    (3, 0x1, 0x01ADEE, 0x0800, 0x0800),
    (4, 0x1, 0x01B5EE, 0x0D2A, 0x0D2A),
    (5, 0x1, 0x01C318, 0x107C, 0x107C),
    (3, 0x1, 0x01D394, 0x0800, 0x0800),
    (4, 0x1, 0x01DB94, 0x2530, 0x2530),
    (5, 0x1, 0x0200C4, 0xFE7A, 0xFE7A),
    (3, 0x2, 0x007D16, 0x0800, 0x0800),
    (4, 0x2, 0x008516, 0x4BD0, 0x4BD0),
    (5, 0x2, 0x00D0E6, 0xFDBA, 0xFDBA),
    (3, 0xD, 0x000000, 0x0800, 0x0800),
    (4, 0xD, 0x000800, 0x974A, 0x974A),
    (5, 0xD, 0x009F4A, 0xD1D8, 0xD1D8),
    (3, 0x3, 0x000000, 0x0800, 0x0800),
    (4, 0x3, 0x000800, 0xED30, 0xED30),
    (5, 0x3, 0x00F530, 0xFEF6, 0xFEF6),
    (3, 0xA, 0x000000, 0x0800, 0x0800),
    (4, 0xA, 0x000800, 0x1B00, 0x1B00),
    (5, 0xA, 0x002300, 0x5E58, 0x5E58),
    (3, 0xA, 0x008158, 0x0800, 0x0800),
    (4, 0xA, 0x008958, 0x99D8, 0x99D8),
    (5, 0xA, 0x012330, 0xFF9A, 0xFF9A),
    (3, 0xB, 0x000000, 0x0800, 0x0800),
    (4, 0xB, 0x000800, 0x09F4, 0x09F4),
    (5, 0xB, 0x0011F4, 0x4E36, 0x4E36),
    (0, 0x1, 0x02FF3E, 0x0372, 0x0372),
    (0, 0x2, 0x01CEA0, 0x1E04, 0x1E04),
    (0, 0x1, 0x0302B0, 0x08EA, 0x08EA),
    (0, 0x1, 0x030B9A, 0x1A46, 0x1A46),
    (0, 0x2, 0x01ECA4, 0x343E, 0x343E),
    (0, 0x2, 0x0220E2, 0x149E, 0x149E),
    (0, 0x2, 0x023580, 0x1866, 0x1866),
    (0, 0x1, 0x0325E0, 0x0266, 0x0266),
    (0, 0x1, 0x000000, 0x0000, 0x0000),
    (0, 0x2, 0x024DE6, 0x01A8, 0x01A8),
    (0, 0x1, 0x032846, 0x1FEC, 0x1FEC),
    (0, 0x2, 0x024F8E, 0x13A4, 0x13A4),
    (0, 0x2, 0x026332, 0x15C4, 0x15C4),
    (0, 0x2, 0x0278F6, 0x0E2A, 0x0E2A),
    (0, 0x2, 0x028720, 0x0366, 0x0366),
    (0, 0x2, 0x028A86, 0x0078, 0x0078),
    (0, 0x2, 0x028AFE, 0x1392, 0x1392),
    (0, 0x2, 0x029E90, 0x06E0, 0x06E0),
    (0, 0x2, 0x02A570, 0x21AE, 0x21AE),
    (0, 0x1, 0x034832, 0x04FA, 0x04FA),
    (0, 0x1, 0x034D2C, 0x129E, 0x129E),
    (0, 0x1, 0x035FCA, 0x09B4, 0x09B4),
    (0, 0x2, 0x02C71E, 0x04EC, 0x04EC),
    (2, 0x4, 0x000000, 0x28FC, 0x7D00),
    (2, 0x4, 0x0028FC, 0x1C2C, 0x7D00),
    (2, 0x4, 0x004528, 0x1F20, 0x7D00),
    (2, 0x4, 0x006448, 0x22A8, 0x7D00),
    (2, 0x1, 0x03697E, 0x033C, 0x7D00),
    (2, 0x4, 0x0086F0, 0x2DA4, 0x7D00),
    (2, 0x4, 0x00B494, 0x3008, 0x7D00),
    (0, 0x2, 0x02CC0A, 0x03C0, 0x03C0),
    (0, 0x2, 0x02CFCA, 0x13E6, 0x13E6),
    (0, 0x2, 0x02E3B0, 0x04DE, 0x04DE),
    (0, 0x2, 0x02E88E, 0x05FA, 0x05FA),
    (0, 0x2, 0x02EE88, 0x025E, 0x025E),
    (0, 0x2, 0x02F0E6, 0x0642, 0x0642),
    (0, 0x2, 0x02F728, 0x19D0, 0x19D0),
    (0, 0x2, 0x0310F8, 0x00E8, 0x00E8),
    (0, 0x6, 0x000000, 0x1022, 0x1022),
    (2, 0x1, 0x036CBA, 0x1A8C, 0x7D00),
    (0, 0x2, 0x0311E0, 0x58AA, 0x58AA),
    (0, 0x6, 0x001022, 0x0990, 0x0990),
    (0, 0x6, 0x0019B2, 0x2C42, 0x2C42),
    (0, 0x6, 0x0045F4, 0x152C, 0x152C),
    (0, 0x6, 0x005B20, 0x05B4, 0x05B4),
    (0, 0x6, 0x0060D4, 0x23B4, 0x23B4),
    (0, 0x6, 0x008488, 0x1FA4, 0x1FA4),
    (0, 0x6, 0x00A42C, 0x0D20, 0x0D20),
    (0, 0x6, 0x00B14C, 0x0528, 0x0528),
    (0, 0x6, 0x00B674, 0x1608, 0x1608),
    (0, 0x6, 0x00CC7C, 0x01EA, 0x01EA),
    (0, 0x6, 0x00CE66, 0x07EA, 0x07EA),
    (0, 0x6, 0x00D650, 0x00E8, 0x00E8),
    (0, 0x7, 0x000000, 0x3978, 0x3978),
    (0, 0x7, 0x003978, 0x1178, 0x1178),
    (0, 0x7, 0x004AF0, 0x14B0, 0x14B0),
    (0, 0x7, 0x005FA0, 0x0AA4, 0x0AA4),
    (0, 0x7, 0x006A44, 0x02DA, 0x02DA),
    (0, 0x7, 0x006D1E, 0x2674, 0x2674),
    (0, 0x7, 0x009392, 0x12F0, 0x12F0),
    (0, 0x7, 0x00A682, 0x5D58, 0x5D58),
    (0, 0x7, 0x0103DA, 0xA222, 0xA222),
    (0, 0x8, 0x000000, 0x2E68, 0x2E68),
    (0, 0x8, 0x002E68, 0x51C6, 0x51C6),
    (0, 0x8, 0x00802E, 0x13E6, 0x13E6),
    (0, 0x8, 0x009414, 0x149E, 0x149E),
    (0, 0x8, 0x00A8B2, 0x58AA, 0x58AA),
    (0, 0x8, 0x01015C, 0x445C, 0x445C),
    (0, 0x7, 0x01A5FC, 0x0D90, 0x0D90),
    (0, 0x7, 0x01B38C, 0x09E4, 0x09E4),
    (0, 0x7, 0x01BD70, 0x198A, 0x198A),
    (0, 0x7, 0x01D6FA, 0x25D2, 0x25D2),
    (0, 0x8, 0x0145B8, 0x2430, 0x2430),
    (0, 0x8, 0x0169E8, 0x1316, 0x1316),
    (0, 0x8, 0x017CFE, 0x0220, 0x0220),
    (0, 0x8, 0x017F1E, 0x05EA, 0x05EA),
    (0, 0x8, 0x018508, 0x043C, 0x043C),
    (0, 0x8, 0x018944, 0x08EA, 0x08EA),
    (0, 0x8, 0x01922E, 0x1478, 0x1478),
    (0, 0x8, 0x01A6A6, 0x432E, 0x432E),
    (0, 0x8, 0x01E9D4, 0x06CE, 0x06CE),
    (3, 0x9, 0x000000, 0x0800, 0x0800),
    (4, 0x9, 0x000800, 0x0CC6, 0x0CC6),
    (5, 0x9, 0x0014C6, 0x13B8, 0x13B8),
    (0, 0x1, 0x038746, 0x189A, 0x189A),
    (0, 0x1, 0x039FE0, 0x07D8, 0x07D8),
    (0, 0x1, 0x03A7B8, 0x0462, 0x0462),
    (0, 0x1, 0x03AC1A, 0x0FA8, 0x0FA8),
    (0, 0xA, 0x0222CA, 0x672E, 0x672E),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (0, 0x8, 0x01F0A2, 0x247C, 0x247C),
    (1, 0x2, 0x036A8A, 0x08C0, 0x08C0),
    (1, 0xB, 0x00602A, 0x08C4, 0x3CC0),
    (0, 0xA, 0x0289F8, 0x4F5A, 0x4F5A),
    (0, 0xA, 0x02D952, 0x4418, 0x4418),
    (0, 0xA, 0x031D6A, 0x293C, 0x293C),
    (0, 0xA, 0x0346A6, 0x3FC8, 0x3FC8),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (2, 0xB, 0x0068EE, 0x2F94, 0x7D00),
    (2, 0xB, 0x009882, 0x33C0, 0x7D00),
];

// Amiga, English release (bank01 is 244868 bytes).
pub const DIR_AMIGA_EN: [DirEntry; 146] = [
    (0, 0x1, 0x000000, 0x0000, 0x0000),
    (0, 0x1, 0x000000, 0x1A3C, 0x1A3C),
    (0, 0x1, 0x001A3C, 0x2E34, 0x2E34),
    (0, 0x1, 0x004870, 0x69F8, 0x69F8),
    (0, 0x1, 0x00B268, 0x45CE, 0x45CE),
    (0, 0x1, 0x00F836, 0x0EFA, 0x0EFA),
    (0, 0x1, 0x010730, 0x0D26, 0x0D26),
    (1, 0x1, 0x011456, 0x0494, 0x3CC0),
    (0, 0x2, 0x000000, 0x2674, 0x2674),
    (0, 0x1, 0x0118EA, 0x2BB6, 0x2BB6),
    (0, 0x1, 0x0144A0, 0x2BB4, 0x2BB4),
    (0, 0x1, 0x017054, 0x0426, 0x0426),
    (0, 0x1, 0x01747A, 0x1852, 0x1852),
    (0, 0x1, 0x018CCC, 0x0594, 0x0594),
    (0, 0x1, 0x019260, 0x13F0, 0x13F0),
    (0, 0x1, 0x01A650, 0x079E, 0x079E),
    (0, 0x2, 0x002674, 0x56A2, 0x56A2),
    (6, 0xC, 0x000000, 0x6214, 0x6214),
    (2, 0x5, 0x000000, 0x2410, 0x7D00),
    (2, 0x5, 0x002410, 0x7D00, 0x7D00),
    (3, 0x1, 0x01ADEE, 0x0800, 0x0800),
    (4, 0x1, 0x01B5EE, 0x0DD8, 0x0DD8),
    (5, 0x1, 0x01C3C6, 0x1090, 0x1090),
    (3, 0x1, 0x01D456, 0x0800, 0x0800),
    (4, 0x1, 0x01DC56, 0x2530, 0x2530),
    (5, 0x1, 0x020186, 0xFE7A, 0xFE7A),
    (3, 0x2, 0x007D16, 0x0800, 0x0800),
    (4, 0x2, 0x008516, 0x4C02, 0x4C02),
    (5, 0x2, 0x00D118, 0xFDBA, 0xFDBA),
    (3, 0xD, 0x000000, 0x0800, 0x0800),
    (4, 0xD, 0x000800, 0x98B6, 0x98B6),
    (5, 0xD, 0x00A0B6, 0xD1D8, 0xD1D8),
    (3, 0x3, 0x000000, 0x0800, 0x0800),
    (4, 0x3, 0x000800, 0xEE5E, 0xEE5E),
    (5, 0x3, 0x00F65E, 0xFD08, 0xFD08),
    (3, 0xA, 0x000000, 0x0800, 0x0800),
    (4, 0xA, 0x000800, 0x1B00, 0x1B00),
    (5, 0xA, 0x002300, 0x5E58, 0x5E58),
    (3, 0xA, 0x008158, 0x0800, 0x0800),
    (4, 0xA, 0x008958, 0x99DC, 0x99DC),
    (5, 0xA, 0x012334, 0xFF9A, 0xFF9A),
    (3, 0xB, 0x000000, 0x0800, 0x0800),
    (4, 0xB, 0x000800, 0x09F4, 0x09F4),
    (5, 0xB, 0x0011F4, 0x4E3A, 0x4E3A),
    (0, 0x1, 0x030000, 0x0372, 0x0372),
    (0, 0x2, 0x01CED2, 0x1E04, 0x1E04),
    (0, 0x1, 0x030372, 0x08EA, 0x08EA),
    (0, 0x1, 0x030C5C, 0x1A46, 0x1A46),
    (0, 0x2, 0x01ECD6, 0x343E, 0x343E),
    (0, 0x2, 0x022114, 0x149E, 0x149E),
    (0, 0x2, 0x0235B2, 0x1866, 0x1866),
    (0, 0x1, 0x0326A2, 0x0266, 0x0266),
    (0, 0x1, 0x000000, 0x0000, 0x0000),
    (0, 0x2, 0x024E18, 0x01A8, 0x01A8),
    (0, 0x1, 0x032908, 0x1FEC, 0x1FEC),
    (0, 0x2, 0x024FC0, 0x13A4, 0x13A4),
    (0, 0x2, 0x026364, 0x15C4, 0x15C4),
    (0, 0x2, 0x027928, 0x0E2A, 0x0E2A),
    (0, 0x2, 0x028752, 0x0366, 0x0366),
    (0, 0x2, 0x028AB8, 0x0078, 0x0078),
    (0, 0x2, 0x028B30, 0x1392, 0x1392),
    (0, 0x2, 0x029EC2, 0x06E0, 0x06E0),
    (0, 0x2, 0x02A5A2, 0x21AE, 0x21AE),
    (0, 0x1, 0x0348F4, 0x04FA, 0x04FA),
    (0, 0x1, 0x034DEE, 0x129E, 0x129E),
    (0, 0x1, 0x03608C, 0x09B4, 0x09B4),
    (0, 0x2, 0x02C750, 0x04EC, 0x04EC),
    (2, 0x4, 0x000000, 0x28FC, 0x7D00),
    (2, 0x4, 0x0028FC, 0x1C2C, 0x7D00),
    (2, 0x4, 0x004528, 0x1F20, 0x7D00),
    (2, 0x4, 0x006448, 0x22A8, 0x7D00),
    (2, 0x1, 0x036A40, 0x033C, 0x7D00),
    (2, 0x4, 0x0086F0, 0x2DA4, 0x7D00),
    (2, 0x4, 0x00B494, 0x3008, 0x7D00),
    (0, 0x2, 0x02CC3C, 0x03C0, 0x03C0),
    (0, 0x2, 0x02CFFC, 0x13E6, 0x13E6),
    (0, 0x2, 0x02E3E2, 0x04DE, 0x04DE),
    (0, 0x2, 0x02E8C0, 0x05FA, 0x05FA),
    (0, 0x2, 0x02EEBA, 0x025E, 0x025E),
    (0, 0x2, 0x02F118, 0x0642, 0x0642),
    (0, 0x2, 0x02F75A, 0x19D0, 0x19D0),
    (0, 0x2, 0x03112A, 0x00E8, 0x00E8),
    (0, 0x6, 0x000000, 0x1022, 0x1022),
    (2, 0x1, 0x036D7C, 0x1A8C, 0x7D00),
    (0, 0x2, 0x031212, 0x58AA, 0x58AA),
    (0, 0x6, 0x001022, 0x0990, 0x0990),
    (0, 0x6, 0x0019B2, 0x2C42, 0x2C42),
    (0, 0x6, 0x0045F4, 0x152C, 0x152C),
    (0, 0x6, 0x005B20, 0x05B4, 0x05B4),
    (0, 0x6, 0x0060D4, 0x23B4, 0x23B4),
    (0, 0x6, 0x008488, 0x1FA4, 0x1FA4),
    (0, 0x6, 0x00A42C, 0x0D20, 0x0D20),
    (0, 0x6, 0x00B14C, 0x0528, 0x0528),
    (0, 0x6, 0x00B674, 0x1608, 0x1608),
    (0, 0x6, 0x00CC7C, 0x01EA, 0x01EA),
    (0, 0x6, 0x00CE66, 0x07EA, 0x07EA),
    (0, 0x6, 0x00D650, 0x00E8, 0x00E8),
    (0, 0x7, 0x000000, 0x3978, 0x3978),
    (0, 0x7, 0x003978, 0x1178, 0x1178),
    (0, 0x7, 0x004AF0, 0x14B0, 0x14B0),
    (0, 0x7, 0x005FA0, 0x0AA4, 0x0AA4),
    (0, 0x7, 0x006A44, 0x02DA, 0x02DA),
    (0, 0x7, 0x006D1E, 0x2674, 0x2674),
    (0, 0x7, 0x009392, 0x12F0, 0x12F0),
    (0, 0x7, 0x00A682, 0x5D58, 0x5D58),
    (0, 0x7, 0x0103DA, 0xA222, 0xA222),
    (0, 0x8, 0x000000, 0x2E68, 0x2E68),
    (0, 0x8, 0x002E68, 0x51C6, 0x51C6),
    (0, 0x8, 0x00802E, 0x13E6, 0x13E6),
    (0, 0x8, 0x009414, 0x149E, 0x149E),
    (0, 0x8, 0x00A8B2, 0x58AA, 0x58AA),
    (0, 0x8, 0x01015C, 0x445C, 0x445C),
    (0, 0x7, 0x01A5FC, 0x0D90, 0x0D90),
    (0, 0x7, 0x01B38C, 0x09E4, 0x09E4),
    (0, 0x7, 0x01BD70, 0x198A, 0x198A),
    (0, 0x7, 0x01D6FA, 0x25D2, 0x25D2),
    (0, 0x8, 0x0145B8, 0x2430, 0x2430),
    (0, 0x8, 0x0169E8, 0x1316, 0x1316),
    (0, 0x8, 0x017CFE, 0x0220, 0x0220),
    (0, 0x8, 0x017F1E, 0x05EA, 0x05EA),
    (0, 0x8, 0x018508, 0x043C, 0x043C),
    (0, 0x8, 0x018944, 0x08EA, 0x08EA),
    (0, 0x8, 0x01922E, 0x1478, 0x1478),
    (0, 0x8, 0x01A6A6, 0x432E, 0x432E),
    (0, 0x8, 0x01E9D4, 0x06CE, 0x06CE),
    (3, 0x9, 0x000000, 0x0800, 0x0800),
    (4, 0x9, 0x000800, 0x0CC6, 0x0CC6),
    (5, 0x9, 0x0014C6, 0x13B8, 0x13B8),
    (0, 0x1, 0x038808, 0x189A, 0x189A),
    (0, 0x1, 0x03A0A2, 0x07D8, 0x07D8),
    (0, 0x1, 0x03A87A, 0x0462, 0x0462),
    (0, 0x1, 0x03ACDC, 0x0FA8, 0x0FA8),
    (0, 0xA, 0x0222CE, 0x672E, 0x672E),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (0, 0x8, 0x01F0A2, 0x247C, 0x247C),
    (1, 0x2, 0x036ABC, 0x08C0, 0x08C0),
    (1, 0xB, 0x00602E, 0x08C4, 0x3CC0),
    (0, 0xA, 0x0289FC, 0x4F5A, 0x4F5A),
    (0, 0xA, 0x02D956, 0x4418, 0x4418),
    (0, 0xA, 0x031D6E, 0x293C, 0x293C),
    (0, 0xA, 0x0346AA, 0x3FC8, 0x3FC8),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (2, 0xB, 0x0068F2, 0x2F94, 0x7D00),
    (2, 0xB, 0x009886, 0x33C0, 0x7d00),
];

// Atari ST, English release (bank01 is 227142 bytes).
pub const DIR_ATARI_EN: [DirEntry; 146] = [
    (0, 0x1, 0x000000, 0x0000, 0x0000),
    (0, 0x1, 0x000000, 0x1A3C, 0x1A3C),
    (0, 0x1, 0x001A3C, 0x2E34, 0x2E34),
    (0, 0x1, 0x004870, 0x69F8, 0x69F8),
    (0, 0x1, 0x000000, 0x0000, 0x0000),
    (0, 0x1, 0x00B268, 0x0EFA, 0x0EFA),
    (0, 0x1, 0x00C162, 0x0D26, 0x0D26),
    (1, 0x1, 0x00CE88, 0x0494, 0x3CC0),
    (0, 0x2, 0x000000, 0x2674, 0x2674),
    (0, 0x1, 0x00D31C, 0x2BB6, 0x2BB6),
    (0, 0x1, 0x00FED2, 0x2BB4, 0x2BB4),
    (0, 0x1, 0x012A86, 0x0426, 0x0426),
    (0, 0x1, 0x012EAC, 0x1852, 0x1852),
    (0, 0x1, 0x0146FE, 0x0594, 0x0594),
    (0, 0x1, 0x014C92, 0x13F0, 0x13F0),
    (0, 0x1, 0x016082, 0x079E, 0x079E),
    (0, 0x2, 0x002674, 0x56A2, 0x56A2),
    (6, 0xC, 0x000000, 0x6214, 0x6214),
    (2, 0x5, 0x000000, 0x0000, 0x0000),
    (2, 0x5, 0x000000, 0x0000, 0x0000),
    (3, 0x1, 0x016820, 0x0800, 0x0800),
    (4, 0x1, 0x017020, 0x0DD8, 0x0DD8),
    (5, 0x1, 0x017DF8, 0x1090, 0x1090),
    (3, 0x1, 0x018E88, 0x0800, 0x0800),
    (4, 0x1, 0x019688, 0x2530, 0x2530),
    (5, 0x1, 0x01BBB8, 0xFE7A, 0xFE7A),
    (3, 0x2, 0x007D16, 0x0800, 0x0800),
    (4, 0x2, 0x008516, 0x4C02, 0x4C02),
    (5, 0x2, 0x00D118, 0xFDBA, 0xFDBA),
    (3, 0xD, 0x000000, 0x0800, 0x0800),
    (4, 0xD, 0x000800, 0x98B6, 0x98B6),
    (5, 0xD, 0x00A0B6, 0xD1D8, 0xD1D8),
    (3, 0x3, 0x000000, 0x0800, 0x0800),
    (4, 0x3, 0x000800, 0xEE5E, 0xEE5E),
    (5, 0x3, 0x00F65E, 0xFD08, 0xFD08),
    (3, 0xA, 0x000000, 0x0800, 0x0800),
    (4, 0xA, 0x000800, 0x1B00, 0x1B00),
    (5, 0xA, 0x002300, 0x5E58, 0x5E58),
    (3, 0xA, 0x008158, 0x0800, 0x0800),
    (4, 0xA, 0x008958, 0x99DC, 0x99DC),
    (5, 0xA, 0x012334, 0xFF9A, 0xFF9A),
    (3, 0xB, 0x000000, 0x0800, 0x0800),
    (4, 0xB, 0x000800, 0x09F4, 0x09F4),
    (5, 0xB, 0x0011F4, 0x4E3A, 0x4E3A),
    (0, 0x1, 0x02BA32, 0x0372, 0x0372),
    (0, 0x2, 0x000000, 0x0000, 0x0000),
    (0, 0x1, 0x02BDA4, 0x08EA, 0x08EA),
    (0, 0x1, 0x02C68E, 0x1A46, 0x1A46),
    (0, 0x2, 0x01CED2, 0x343E, 0x343E),
    (0, 0x2, 0x020310, 0x149E, 0x149E),
    (0, 0x2, 0x0217AE, 0x1866, 0x1866),
    (0, 0x1, 0x02E0D4, 0x0266, 0x0266),
    (0, 0x1, 0x000000, 0x0000, 0x0000),
    (0, 0x2, 0x023014, 0x01A8, 0x01A8),
    (0, 0x1, 0x02E33A, 0x1FEC, 0x1FEC),
    (0, 0x2, 0x000000, 0x0000, 0x0000),
    (0, 0x2, 0x000000, 0x0000, 0x0000),
    (0, 0x2, 0x0231BC, 0x0E2A, 0x0E2A),
    (0, 0x2, 0x023FE6, 0x0366, 0x0366),
    (0, 0x2, 0x02434C, 0x0078, 0x0078),
    (0, 0x2, 0x0243C4, 0x1392, 0x1392),
    (0, 0x2, 0x025756, 0x06E0, 0x06E0),
    (0, 0x2, 0x025E36, 0x21AE, 0x21AE),
    (0, 0x1, 0x030326, 0x04FA, 0x04FA),
    (0, 0x1, 0x030820, 0x129E, 0x129E),
    (0, 0x1, 0x031ABE, 0x09B4, 0x09B4),
    (0, 0x2, 0x027FE4, 0x04EC, 0x04EC),
    (2, 0x4, 0x000000, 0x2654, 0x7D00),
    (2, 0x4, 0x002654, 0x1920, 0x7D00),
    (2, 0x4, 0x003F74, 0x1A78, 0x7D00),
    (2, 0x4, 0x0059EC, 0x1EC4, 0x7D00),
    (2, 0x1, 0x032472, 0x045C, 0x7D00),
    (2, 0x4, 0x0078B0, 0x2760, 0x7D00),
    (2, 0x4, 0x00A010, 0x2B74, 0x7D00),
    (0, 0x2, 0x0284D0, 0x03C0, 0x03C0),
    (0, 0x2, 0x028890, 0x13E6, 0x13E6),
    (0, 0x2, 0x029C76, 0x04DE, 0x04DE),
    (0, 0x2, 0x02A154, 0x05FA, 0x05FA),
    (0, 0x2, 0x02A74E, 0x025E, 0x025E),
    (0, 0x2, 0x02A9AC, 0x0642, 0x0642),
    (0, 0x2, 0x02AFEE, 0x19D0, 0x19D0),
    (0, 0x2, 0x02C9BE, 0x00E8, 0x00E8),
    (0, 0x6, 0x000000, 0x1022, 0x1022),
    (2, 0x1, 0x0328CE, 0x19FC, 0x7D00),
    (0, 0x2, 0x02CAA6, 0x58AA, 0x58AA),
    (0, 0x6, 0x001022, 0x0990, 0x0990),
    (0, 0x6, 0x0019B2, 0x2C42, 0x2C42),
    (0, 0x6, 0x0045F4, 0x152C, 0x152C),
    (0, 0x6, 0x005B20, 0x05B4, 0x05B4),
    (0, 0x6, 0x0060D4, 0x23B4, 0x23B4),
    (0, 0x6, 0x008488, 0x1FA4, 0x1FA4),
    (0, 0x6, 0x00A42C, 0x0D20, 0x0D20),
    (0, 0x6, 0x00B14C, 0x0528, 0x0528),
    (0, 0x6, 0x00B674, 0x1608, 0x1608),
    (0, 0x6, 0x00CC7C, 0x01EA, 0x01EA),
    (0, 0x6, 0x00CE66, 0x07EA, 0x07EA),
    (0, 0x6, 0x00D650, 0x00E8, 0x00E8),
    (0, 0x7, 0x000000, 0x3978, 0x3978),
    (0, 0x7, 0x003978, 0x1178, 0x1178),
    (0, 0x7, 0x004AF0, 0x14B0, 0x14B0),
    (0, 0x7, 0x005FA0, 0x0AA4, 0x0AA4),
    (0, 0x7, 0x006A44, 0x02DA, 0x02DA),
    (0, 0x7, 0x006D1E, 0x2674, 0x2674),
    (0, 0x7, 0x009392, 0x12F0, 0x12F0),
    (0, 0x7, 0x00A682, 0x5D58, 0x5D58),
    (0, 0x7, 0x000000, 0x0000, 0x0000),
    (0, 0x8, 0x000000, 0x2E68, 0x2E68),
    (0, 0x8, 0x002E68, 0x51C6, 0x51C6),
    (0, 0x8, 0x00802E, 0x13E6, 0x13E6),
    (0, 0x8, 0x009414, 0x149E, 0x149E),
    (0, 0x8, 0x00A8B2, 0x58AA, 0x58AA),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (0, 0x7, 0x0103DA, 0x0D90, 0x0D90),
    (0, 0x7, 0x01116A, 0x09E4, 0x09E4),
    (0, 0x7, 0x011B4E, 0x198A, 0x198A),
    (0, 0x7, 0x0134D8, 0x25D2, 0x25D2),
    (0, 0x8, 0x01015C, 0x2430, 0x2430),
    (0, 0x8, 0x01258C, 0x1316, 0x1316),
    (0, 0x8, 0x0138A2, 0x0220, 0x0220),
    (0, 0x8, 0x013AC2, 0x05EA, 0x05EA),
    (0, 0x8, 0x0140AC, 0x043C, 0x043C),
    (0, 0x8, 0x0144E8, 0x08EA, 0x08EA),
    (0, 0x8, 0x014DD2, 0x1478, 0x1478),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (0, 0x8, 0x01624A, 0x06CE, 0x06CE),
    (3, 0x9, 0x000000, 0x0800, 0x0800),
    (4, 0x9, 0x000800, 0x0CC6, 0x0CC6),
    (5, 0x9, 0x0014C6, 0x13B8, 0x13B8),
    (0, 0x1, 0x0342CA, 0x189A, 0x189A),
    (0, 0x1, 0x035B64, 0x07D8, 0x07D8),
    (0, 0x1, 0x03633C, 0x0462, 0x0462),
    (0, 0x1, 0x03679E, 0x0FA8, 0x0FA8),
    (0, 0xA, 0x0222CE, 0x672E, 0x672E),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (0, 0x8, 0x016918, 0x247C, 0x247C),
    (1, 0x2, 0x032350, 0x08C0, 0x08C0),
    (1, 0xB, 0x00602E, 0x08C4, 0x3CC0),
    (0, 0xA, 0x0289FC, 0x4F5A, 0x4F5A),
    (0, 0xA, 0x02D956, 0x4418, 0x4418),
    (0, 0xA, 0x031D6E, 0x293C, 0x293C),
    (0, 0xA, 0x0346AA, 0x3FC8, 0x3FC8),
    (0, 0x8, 0x000000, 0x0000, 0x0000),
    (2, 0xB, 0x0068F2, 0x29C4, 0x7D00),
    (2, 0xB, 0x0092B6, 0x2C00, 0x7D00),
];

